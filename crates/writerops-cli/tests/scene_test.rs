use writerops_testing::TestWorld;

#[test]
fn test_save_scene_from_stdin() {
    let world = TestWorld::new();

    let result = world
        .run_with_input(
            &["save-scene", "--title", "The Rooftop!"],
            "사랑해.\n정말로.\n\n\n이후 입력은 무시\n",
        )
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("scenes/001_The_Rooftop.txt"));
    assert!(result.stdout().contains("(9자)"));

    let text = world.read("scenes/001_The_Rooftop.txt").unwrap();
    assert_eq!(text, "사랑해.\n정말로.\n");
}

#[test]
fn test_save_scene_numbers_sequentially() {
    let world = TestWorld::new();

    for title in ["first", "second"] {
        let result = world
            .run_with_input(&["save-scene", "--title", title], "본문\n")
            .unwrap();
        assert!(result.success());
    }

    assert_eq!(
        world.files_in("scenes"),
        vec!["001_first.txt", "002_second.txt"]
    );
}

#[test]
fn test_save_scene_json_prompts_for_title() {
    let world = TestWorld::new();

    let result = world
        .run_with_input(&["save-scene", "--json"], "Night Train\n기차가 떠난다.\n")
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let files = world.files_in("stories");
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("Night_Train_"));
    assert!(files[0].ends_with(".json"));

    let draft: serde_json::Value =
        serde_json::from_str(&world.read(format!("stories/{}", files[0])).unwrap()).unwrap();
    assert_eq!(draft["title"], "Night Train");
    assert_eq!(draft["text"], "기차가 떠난다.");
}

#[test]
fn test_save_scene_empty_text_fails() {
    let world = TestWorld::new();

    let result = world
        .run_with_input(&["save-scene", "--title", "empty"], "\n\n")
        .unwrap();

    assert!(!result.success());
    assert!(!world.data_dir().join("scenes").exists());
}
