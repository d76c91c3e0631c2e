#![cfg(unix)]

use std::io::Read;
use std::process::{Command, Stdio};

#[test]
fn interrupt_at_menu_prompt_exits_cleanly_without_saving() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("news.yml");

    let mut child = Command::new(env!("CARGO_BIN_EXE_manage-news"))
        .arg("--data-file")
        .arg(&data_file)
        .env_remove("SITEDATA_LOG_DIR")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut stdout = child.stdout.take().unwrap();
    let mut seen = Vec::new();
    let mut chunk = [0u8; 256];
    while !String::from_utf8_lossy(&seen).contains("Select option (0-7): ") {
        let read = stdout.read(&mut chunk).unwrap();
        assert!(read > 0, "tool exited before showing the menu");
        seen.extend_from_slice(&chunk[..read]);
    }

    let kill = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .unwrap();
    assert!(kill.success());

    // Stdin is still open here, so only the interrupt can end the tool.
    stdout.read_to_end(&mut seen).unwrap();
    let status = child.wait().unwrap();

    assert_eq!(status.code(), Some(0));
    assert!(String::from_utf8_lossy(&seen).ends_with("Exiting...\n"));
    assert!(!data_file.exists());
}
