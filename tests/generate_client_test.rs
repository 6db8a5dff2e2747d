//! End-to-end tests: petstore description in, TypeScript client tree out

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use tempfile::TempDir;

use swagger2ts::application::{
    ApplicationError, GenerateClientRequest, GenerateClientUseCase, InspectDescriptionUseCase,
};
use swagger2ts::generation::{BuildOptions, GenerationError};
use swagger2ts::infrastructure::openapi::CompositeDescriptionLoader;
use swagger2ts::infrastructure::output::FileSystemOutputService;
use swagger2ts::infrastructure::templates::{EmbeddedTemplateRepository, FileSystemTemplateLoader};

fn fixture() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/petstore.swagger.json")
        .display()
        .to_string()
}

fn use_case() -> GenerateClientUseCase {
    GenerateClientUseCase::new(
        Arc::new(CompositeDescriptionLoader::new()),
        Arc::new(EmbeddedTemplateRepository::new()),
        Arc::new(FileSystemTemplateLoader::new()),
        Arc::new(FileSystemOutputService::new()),
    )
}

/// Relative path -> content for every file under `root`
fn snapshot(root: &Path) -> BTreeMap<String, String> {
    fn walk(root: &Path, dir: &Path, files: &mut BTreeMap<String, String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, files);
            } else {
                let relative = path.strip_prefix(root).unwrap().to_string_lossy();
                files.insert(
                    relative.replace('\\', "/"),
                    fs::read_to_string(&path).unwrap(),
                );
            }
        }
    }

    let mut files = BTreeMap::new();
    walk(root, root, &mut files);
    files
}

#[tokio::test]
async fn test_generates_expected_layout() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("client");

    let response = use_case()
        .execute(GenerateClientRequest::new(fixture(), &output))
        .await
        .unwrap();

    assert_eq!(response.models, 5);
    assert_eq!(response.enums, 2);
    assert_eq!(response.methods, 8);
    assert_eq!(response.artifacts_count, 1 + 5 + 2 + 1);

    let files: Vec<String> = snapshot(&output).into_keys().collect();
    assert_eq!(
        files,
        vec![
            "client.ts",
            "enums/OrderStatus.ts",
            "enums/PetStatus.ts",
            "models.ts",
            "models/Category.ts",
            "models/Order.ts",
            "models/PagePet.ts",
            "models/Pet.ts",
            "models/Tag.ts",
        ]
    );

    // No staging leftovers
    assert!(
        fs::read_dir(&output)
            .unwrap()
            .all(|e| !e.unwrap().file_name().to_string_lossy().starts_with('.'))
    );
}

#[tokio::test]
async fn test_client_follows_document_order() {
    let temp_dir = TempDir::new().unwrap();
    use_case()
        .execute(GenerateClientRequest::new(fixture(), temp_dir.path()))
        .await
        .unwrap();

    let client = fs::read_to_string(temp_dir.path().join("client.ts")).unwrap();

    let expected = [
        "public addPet(",
        "public updatePet(",
        "public findPetsByStatus(",
        "public getPetById(",
        "public deletePet(",
        "public getInventory(",
        "public getStoreOrderByOrderId(",
        "public login(",
    ];
    let positions: Vec<usize> = expected
        .iter()
        .map(|needle| {
            client
                .find(needle)
                .unwrap_or_else(|| panic!("missing {needle}"))
        })
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    assert!(client.contains("private domain = 'https://petstore.swagger.io/v2';"));
    assert!(client.contains("const path = `/pet/${petId}`;"));
    assert!(client.contains("params = params.set('format', 'json');"));
    assert!(client.contains("public addPet(body: models.Pet)"));
}

#[tokio::test]
async fn test_form_data_operations_and_proxy_headers_are_excluded() {
    let temp_dir = TempDir::new().unwrap();
    use_case()
        .execute(GenerateClientRequest::new(fixture(), temp_dir.path()))
        .await
        .unwrap();

    let client = fs::read_to_string(temp_dir.path().join("client.ts")).unwrap();
    assert!(!client.contains("updatePetWithForm"));
    assert!(!client.contains("uploadFile"));
    assert!(!client.contains("X-Forwarded-For"));
}

#[tokio::test]
async fn test_node_mode_keeps_proxy_headers() {
    let temp_dir = TempDir::new().unwrap();
    let mut request = GenerateClientRequest::new(fixture(), temp_dir.path());
    request.is_node = true;
    use_case().execute(request).await.unwrap();

    let client = fs::read_to_string(temp_dir.path().join("client.ts")).unwrap();
    assert!(client.contains("X-Forwarded-For"));
    assert!(client.contains("process.env.API_DOMAIN"));
}

#[tokio::test]
async fn test_models_and_enums_content() {
    let temp_dir = TempDir::new().unwrap();
    use_case()
        .execute(GenerateClientRequest::new(fixture(), temp_dir.path()))
        .await
        .unwrap();

    let pet = fs::read_to_string(temp_dir.path().join("models/Pet.ts")).unwrap();
    assert!(pet.contains("import { Category } from './Category';"));
    assert!(pet.contains("import { Tag } from './Tag';"));
    assert!(pet.contains("import { PetStatus } from '../enums/PetStatus';"));
    assert!(pet.contains("export interface Pet {"));
    assert!(pet.contains("    photoUrls: Array<string>;"));
    assert!(pet.contains("    tags?: Array<Tag>;"));

    let page = fs::read_to_string(temp_dir.path().join("models/PagePet.ts")).unwrap();
    assert!(page.contains("export interface PagePet {"));
    assert!(page.contains("import { Pet } from './Pet';"));

    let status = fs::read_to_string(temp_dir.path().join("enums/OrderStatus.ts")).unwrap();
    assert!(status.contains("export enum OrderStatus {"));
    assert!(status.contains("    Placed = \"placed\","));
    assert!(status.contains("    Delivered = \"delivered\"\n"));

    let barrel = fs::read_to_string(temp_dir.path().join("models.ts")).unwrap();
    let order = barrel.find("./models/Order'").unwrap();
    let category = barrel.find("./models/Category'").unwrap();
    let enums = barrel.find("./enums/OrderStatus'").unwrap();
    assert!(order < category);
    assert!(category < enums);
}

#[tokio::test]
async fn test_generation_is_idempotent() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    use_case()
        .execute(GenerateClientRequest::new(fixture(), first.path()))
        .await
        .unwrap();
    use_case()
        .execute(GenerateClientRequest::new(fixture(), second.path()))
        .await
        .unwrap();
    // Regenerating over an existing tree replaces it in place
    use_case()
        .execute(GenerateClientRequest::new(fixture(), second.path()))
        .await
        .unwrap();

    assert_eq!(snapshot(first.path()), snapshot(second.path()));
}

#[tokio::test]
async fn test_custom_client_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut request = GenerateClientRequest::new(fixture(), temp_dir.path());
    request.client_file = "index.ts".to_string();
    use_case().execute(request).await.unwrap();

    assert!(temp_dir.path().join("index.ts").exists());
    assert!(!temp_dir.path().join("client.ts").exists());
}

#[tokio::test]
async fn test_unresolvable_reference_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("broken.json");
    fs::write(
        &input,
        r##"{
            "swagger": "2.0",
            "info": {"title": "Broken"},
            "paths": {},
            "definitions": {
                "Pet": {"properties": {"owner": {"$ref": "#/definitions/Owner"}}}
            }
        }"##,
    )
    .unwrap();
    let output = temp_dir.path().join("out");

    let err = use_case()
        .execute(GenerateClientRequest::new(
            input.display().to_string(),
            &output,
        ))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::GenerationError(GenerationError::UnresolvableReference { .. })
    ));
    assert!(!output.exists());
}

fn write_description(dir: &Path, definitions: serde_json::Value) -> String {
    let input = dir.join("description.json");
    let document = serde_json::json!({
        "swagger": "2.0",
        "info": {"title": "Inline"},
        "paths": {},
        "definitions": definitions
    });
    fs::write(&input, document.to_string()).unwrap();
    input.display().to_string()
}

#[tokio::test]
async fn test_definition_names_cannot_escape_the_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let outside = temp_dir.path().join("outside");
    let key = outside.join("pwned").display().to_string();
    let input = write_description(temp_dir.path(), serde_json::json!({ key: {} }));
    let output = temp_dir.path().join("out");

    let err = use_case()
        .execute(GenerateClientRequest::new(input, &output))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::GenerationError(GenerationError::InvalidName { .. })
    ));
    assert!(!outside.join("pwned.ts").exists());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_enum_sharing_a_model_name_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_description(
        temp_dir.path(),
        serde_json::json!({
            "OrderStatus": {"properties": {"code": {"type": "string"}}},
            "Order": {"properties": {"status": {"type": "string", "enum": ["placed"]}}}
        }),
    );
    let output = temp_dir.path().join("out");

    let err = use_case()
        .execute(GenerateClientRequest::new(input, &output))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::GenerationError(GenerationError::NameCollision { .. })
    ));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_client_file_cannot_replace_the_barrel() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out");
    let mut request = GenerateClientRequest::new(fixture(), &output);
    request.client_file = "models.ts".to_string();

    let err = use_case().execute(request).await.unwrap_err();

    assert!(matches!(err, ApplicationError::ValidationError(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_unusual_property_and_literal_names_render_valid_typescript() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_description(
        temp_dir.path(),
        serde_json::json!({
            "Job": {"properties": {
                "dry-run": {"type": "boolean"},
                "priority": {"type": "integer", "enum": [3, 10]}
            }}
        }),
    );
    let output = temp_dir.path().join("out");
    use_case()
        .execute(GenerateClientRequest::new(input, &output))
        .await
        .unwrap();

    let job = fs::read_to_string(output.join("models/Job.ts")).unwrap();
    assert!(job.contains("    \"dry-run\"?: boolean;"));
    assert!(job.contains("    priority?: JobPriority;"));

    let priority = fs::read_to_string(output.join("enums/JobPriority.ts")).unwrap();
    assert!(priority.contains("    _3 = 3,"));
    assert!(priority.contains("    _10 = 10\n"));
}

#[tokio::test]
async fn test_missing_input_is_a_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = use_case()
        .execute(GenerateClientRequest::new(
            temp_dir.path().join("nope.json").display().to_string(),
            temp_dir.path().join("out"),
        ))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::GenerationError(GenerationError::LoadError(_))
    ));
    assert!(!temp_dir.path().join("out").exists());
}

#[tokio::test]
async fn test_yaml_input_matches_json_input() {
    let temp_dir = TempDir::new().unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(fixture()).unwrap()).unwrap();
    let yaml_path = temp_dir.path().join("petstore.yaml");
    fs::write(&yaml_path, serde_yaml::to_string(&json).unwrap()).unwrap();

    let from_json = temp_dir.path().join("json");
    let from_yaml = temp_dir.path().join("yaml");
    use_case()
        .execute(GenerateClientRequest::new(fixture(), &from_json))
        .await
        .unwrap();
    use_case()
        .execute(GenerateClientRequest::new(
            yaml_path.display().to_string(),
            &from_yaml,
        ))
        .await
        .unwrap();

    assert_eq!(snapshot(&from_json), snapshot(&from_yaml));
}

#[tokio::test]
async fn test_inspect_reports_view_model() {
    let use_case = InspectDescriptionUseCase::new(Arc::new(CompositeDescriptionLoader::new()));
    let view_model = use_case
        .execute(&fixture(), BuildOptions::default())
        .await
        .unwrap();

    let names: Vec<&str> = view_model
        .definitions
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, vec!["Order", "Category", "Tag", "Pet", "PagePet"]);
    assert!(view_model.is_secure);
    assert!(view_model.methods.last().unwrap().last);
}

#[test]
fn test_cli_generate_and_templates() {
    let temp_dir = TempDir::new().unwrap();
    let binary = env!("CARGO_BIN_EXE_swagger2ts");

    let status = Command::new(binary)
        .args(["--log-level", "warn", "generate", "--input"])
        .arg(fixture())
        .arg("--output")
        .arg(temp_dir.path().join("generated"))
        .status()
        .unwrap();
    assert!(status.success());
    assert!(temp_dir.path().join("generated/client.ts").exists());

    let list = Command::new(binary).args(["templates", "list"]).output().unwrap();
    assert!(list.status.success());
    assert!(String::from_utf8_lossy(&list.stdout).contains("angular2"));

    let export = Command::new(binary)
        .args(["templates", "export"])
        .arg(temp_dir.path().join("custom"))
        .output()
        .unwrap();
    assert!(export.status.success());
    assert!(temp_dir.path().join("custom/client.ts.tera").exists());

    let status = Command::new(binary)
        .args(["--log-level", "warn", "generate", "--input"])
        .arg(fixture())
        .arg("--output")
        .arg(temp_dir.path().join("from-dir"))
        .arg("--template-dir")
        .arg(temp_dir.path().join("custom"))
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(
        snapshot(&temp_dir.path().join("generated")),
        snapshot(&temp_dir.path().join("from-dir"))
    );
}

#[test]
fn test_cli_fails_on_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_swagger2ts"))
        .args(["generate", "--input"])
        .arg(temp_dir.path().join("missing.json"))
        .arg("--output")
        .arg(temp_dir.path().join("out"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!temp_dir.path().join("out").exists());
}
