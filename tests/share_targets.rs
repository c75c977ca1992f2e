use colorpage::config::{ShareConfig, ShareTargetKind};
use colorpage::packaging::to_file;
use colorpage::share::{file_name_for_prompt, ShareRequest, ShareSheet};

#[test]
fn save_target_writes_packaged_page() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let sheet = ShareSheet::from_config(&ShareConfig {
        targets: vec![ShareTargetKind::Save],
        export_dir: Some(temp_dir.path().join("pages")),
    });
    let file = to_file("iVBORw0KGgo=", &file_name_for_prompt("a red fox"), "image/png").unwrap();
    let request = ShareRequest::for_prompt("a red fox", file);

    let choices = sheet.choices(&request.files);
    assert_eq!(choices.len(), 1);
    assert!(choices[0].label.starts_with("Save to "));

    let first = sheet.deliver(choices[0].index, &request).unwrap();
    let second = sheet.deliver(choices[0].index, &request).unwrap();

    let pages = temp_dir.path().join("pages");
    assert!(first.summary.ends_with("a_red_fox_coloring_page.png"));
    assert!(second.summary.ends_with("a_red_fox_coloring_page-1.png"));
    assert_eq!(
        std::fs::read(pages.join("a_red_fox_coloring_page.png")).unwrap(),
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]
    );
}

#[test]
fn sheet_follows_configured_order() {
    let sheet = ShareSheet::from_config(&ShareConfig {
        targets: vec![ShareTargetKind::Save, ShareTargetKind::Clipboard],
        export_dir: Some(std::env::temp_dir()),
    });
    assert_eq!(sheet.len(), 2);

    let empty = ShareSheet::from_config(&ShareConfig {
        targets: Vec::new(),
        export_dir: None,
    });
    assert!(empty.is_empty());
}

#[test]
fn prompts_with_path_characters_stay_in_export_dir() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let pages = temp_dir.path().join("pages");
    let sheet = ShareSheet::from_config(&ShareConfig {
        targets: vec![ShareTargetKind::Save],
        export_dir: Some(pages.clone()),
    });

    for prompt in ["../escaped", "cats/dogs at play"] {
        let file = to_file("iVBORw0KGgo=", &file_name_for_prompt(prompt), "image/png").unwrap();
        let request = ShareRequest::for_prompt(prompt, file);
        sheet.deliver(0, &request).unwrap();
    }

    assert!(pages.join("__escaped_coloring_page.png").exists());
    assert!(pages.join("cats_dogs_at_play_coloring_page.png").exists());
    assert!(!temp_dir.path().join("escaped_coloring_page.png").exists());
    assert_eq!(std::fs::read_dir(&pages).unwrap().count(), 2);
}
