use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn todo_list() -> Command {
    let mut cmd = Command::cargo_bin("todo-list").expect("binary should build");
    cmd.env_remove("TODO__LOG__LEVEL")
        .env_remove("TODO__DISPLAY__SHOW_INDEX")
        .env_remove("TODO__DISPLAY__SEPARATOR");
    cmd
}

#[test]
fn exits_cleanly_from_menu() {
    todo_list()
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("------ TODO MENU ------"))
        .stdout(predicate::str::ends_with("Exiting program. bye!\n"));
}

#[test]
fn add_delete_and_find_scenario() {
    todo_list()
        .write_stdin("1\n1\nBuy milk\n2%\n1\n2\nWalk dog\n\n2\n1\n3\n0\n3\n1\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo ID 1 deleted successfully."))
        .stdout(predicate::str::contains(
            "Found Todo:\nID: 2\nTitle: Walk dog\nDescription: \n",
        ))
        .stdout(predicate::str::contains("Todo not found at index 1."))
        .stdout(predicate::str::contains("Title: Buy milk").not());
}

#[test]
fn empty_list_prints_no_items() {
    todo_list()
        .write_stdin("4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No todo items found."));
}

#[test]
fn unparsable_choice_exits_successfully() {
    todo_list()
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Invalid input. Exiting.\n"));
}

#[test]
fn closed_stdin_exits_successfully() {
    todo_list()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Exiting."));
}

#[test]
fn config_file_enables_index_display() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let file = dir.child("settings.toml");
    file.write_str("[display]\nshow_index = true\nseparator = \"***\"\n")?;

    todo_list()
        .arg("--config")
        .arg(file.path())
        .write_stdin("1\n3\nRead book\nchapter 2\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Index: 0\nID: 3\nTitle: Read book\nDescription: chapter 2\n***\n",
        ));

    Ok(())
}

#[test]
fn default_config_file_is_picked_up_from_working_directory()
-> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    dir.child("todo-list.toml")
        .write_str("[display]\nshow_index = true\n")?;

    todo_list()
        .current_dir(dir.path())
        .write_stdin("1\n3\na\nb\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Index: 0\n"));

    Ok(())
}

#[test]
fn environment_overrides_display_settings() {
    todo_list()
        .env("TODO__DISPLAY__SEPARATOR", "+++")
        .write_stdin("1\n3\na\nb\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Description: b\n+++\n"));
}

#[test]
fn missing_config_file_fails() {
    todo_list()
        .arg("--config")
        .arg("no/such/file.toml")
        .write_stdin("5\n")
        .assert()
        .failure();
}

#[test]
fn unknown_log_level_fails() {
    todo_list()
        .arg("--log-level")
        .arg("chatty")
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown log level 'chatty'"));
}

#[test]
fn unknown_level_in_config_file_fails_without_override()
-> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let file = dir.child("settings.toml");
    file.write_str("[log]\nlevel = \"loud\"\n")?;

    todo_list()
        .arg("--config")
        .arg(file.path())
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown log level 'loud'"));

    Ok(())
}

#[test]
fn log_level_flag_overrides_unknown_level_in_config_file()
-> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let file = dir.child("settings.toml");
    file.write_str("[log]\nlevel = \"loud\"\n")?;

    todo_list()
        .arg("--config")
        .arg(file.path())
        .arg("--log-level")
        .arg("warn")
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Exiting program. bye!\n"));

    Ok(())
}

#[test]
fn blank_line_at_menu_keeps_session_alive() {
    todo_list()
        .write_stdin("1\n1\nBuy milk\n2%\n\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Buy milk"))
        .stdout(predicate::str::contains("Invalid input.").not());
}

#[test]
fn logs_go_to_stderr_not_stdout() {
    todo_list()
        .arg("--log-level")
        .arg("info")
        .write_stdin("5\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting todo menu"))
        .stdout(predicate::str::contains("Starting todo menu").not());
}
