use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn mcsm() -> Command {
    Command::cargo_bin("mcsm").unwrap()
}

fn stage_spigot(root: &Path) {
    let staging = root.join("resources");
    fs::create_dir_all(&staging).unwrap();
    fs::write(
        staging.join("server.properties"),
        "#Minecraft server properties\nmotd=A Minecraft Server\nserver-port=25565\n",
    )
    .unwrap();
    fs::write(staging.join("spigot-1.16.3.jar"), b"PK").unwrap();
}

#[test]
fn test_profile_prints_forge_preset() {
    let output = mcsm()
        .args(["profile", "--variant", "forge"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("binary = \"forge-{version}-10.13.4.1614-{version}-universal.jar\""));
    assert!(stdout.contains("addon_dir = \"mods\""));
}

#[test]
fn test_unknown_variant_is_rejected() {
    mcsm()
        .args(["profile", "--variant", "paper"])
        .assert()
        .failure();
}

#[test]
fn test_status_of_empty_root() {
    let root = tempdir().unwrap();
    let output = mcsm()
        .args(["status", "--root"])
        .arg(root.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("State:   uninstalled"));
    assert!(!root.path().join("server_files").exists());
}

#[test]
fn test_status_with_missing_profile_writes_nothing() {
    let root = tempdir().unwrap();
    let profile = root.path().join("profile.toml");
    let output = mcsm()
        .args(["status", "--root"])
        .arg(root.path())
        .arg("--profile")
        .arg(&profile)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load profile"));
    assert!(!profile.exists());
}

#[test]
fn test_run_without_resources_fails() {
    let root = tempdir().unwrap();
    let output = mcsm()
        .args(["run", "--root"])
        .arg(root.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Resources folder is missing files"));

    let trail = fs::read_to_string(root.path().join("server_files/creator_logs")).unwrap();
    assert!(trail.contains("Resources were lost"));
}

#[cfg(unix)]
#[test]
fn test_full_bootstrap_with_fake_runtime() {
    use std::os::unix::fs::PermissionsExt;

    let root = tempdir().unwrap();
    stage_spigot(root.path());

    // Stands in for `java`: records its arguments and, like the real server,
    // writes eula.txt on first start
    let runtime = root.path().join("fake-java");
    fs::write(
        &runtime,
        "#!/bin/sh\n\
         echo \"$@\" >> invocations\n\
         if [ ! -f eula.txt ]; then printf '#EULA\\n#date\\neula=false\\n' > eula.txt; fi\n",
    )
    .unwrap();
    fs::set_permissions(&runtime, fs::Permissions::from_mode(0o755)).unwrap();

    let profile = root.path().join("profile.toml");
    fs::write(
        &profile,
        format!("runtime = \"{}\"\n", runtime.display()),
    )
    .unwrap();

    let output = mcsm()
        .args(["run", "--root"])
        .arg(root.path())
        .arg("--profile")
        .arg(&profile)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Server IP: "));
    assert!(stdout.contains("Version: Spigot 1.16.3"));
    assert!(stdout.contains("Allocated RAM: 1024MB"));

    let install = root.path().join("server_files");
    let invocations = fs::read_to_string(install.join("invocations")).unwrap();
    let lines: Vec<&str> = invocations.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        assert_eq!(
            line,
            "-Xmx1024M -Xms1024M -DIReallyKnowWhatIAmDoingISwear=true -jar spigot-1.16.3.jar nogui"
        );
    }

    assert_eq!(
        fs::read_to_string(install.join("eula.txt")).unwrap(),
        "#EULA\n#date\neula=true\n"
    );
    assert!(
        fs::read_to_string(install.join("ram_config.msf"))
            .unwrap()
            .starts_with("ram=1024\n")
    );
    let properties = fs::read_to_string(install.join("server.properties")).unwrap();
    assert!(
        properties
            .lines()
            .nth(2)
            .is_some_and(|l| l.starts_with("server-port="))
    );

    let status = mcsm()
        .args(["status", "--root"])
        .arg(root.path())
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&status.stdout).contains("State:   ready"));
}
