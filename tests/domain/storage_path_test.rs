use policy_audit::domain::StoragePath;

fn split_name(path: &StoragePath) -> (String, String) {
    let (stem, ext) = path.as_str().rsplit_once('.').unwrap();
    (stem.to_string(), ext.to_string())
}

#[test]
fn given_pdf_filename_when_creating_upload_path_then_format_is_hex_dot_extension() {
    let path = StoragePath::for_upload("policy.pdf");
    let (stem, ext) = split_name(&path);

    assert_eq!(ext, "pdf");
    assert_eq!(stem.len(), 32);
    assert!(stem.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn given_filename_without_extension_when_creating_upload_path_then_defaults_to_pdf() {
    let path = StoragePath::for_upload("scan");
    assert!(path.as_str().ends_with(".pdf"));
}

#[test]
fn given_traversal_filename_when_creating_upload_path_then_only_last_component_is_used() {
    let path = StoragePath::for_upload("../../etc/handbook.docx");

    assert!(!path.as_str().contains('/'));
    assert!(!path.as_str().contains(".."));
    assert!(path.as_str().ends_with(".docx"));
}

#[test]
fn given_same_filename_twice_when_creating_upload_paths_then_paths_differ() {
    let path_a = StoragePath::for_upload("file.pdf");
    let path_b = StoragePath::for_upload("file.pdf");

    assert_ne!(path_a, path_b);
}

#[test]
fn given_storage_path_when_displayed_then_matches_as_str() {
    let path = StoragePath::for_upload("test.pdf");

    assert_eq!(format!("{}", path), path.as_str());
}
