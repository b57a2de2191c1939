use std::fs::{File, create_dir_all, write};

use javaproc::{
    CLASSPATH_SEPARATOR, JavaProcess, JavaRuntime, LaunchError, Profile, profile::PROFILE_FILE,
    split_args,
};

#[tokio::test]
async fn legacy_runtime_keeps_perm_gen() {
    let root = tempfile::tempdir().unwrap();
    let jre = root.path().join("jre7");
    create_dir_all(jre.join("bin")).unwrap();
    File::create(jre.join("bin").join("java")).unwrap();
    create_dir_all(root.path().join("libraries")).unwrap();
    File::create(root.path().join("libraries").join("lwjgl.jar")).unwrap();
    write(
        root.path().join(PROFILE_FILE),
        r#"
        main-class = "net.minecraft.launchwrapper.Launch"
        classpath = ["minecraft.jar"]
        classpath-dirs = ["libraries"]
        add-classpath-flag = false
        extra-args = "--tweakClass \"cpw.mods.fml.common.launcher.FMLTweaker\""

        [memory]
        max = 2048
        perm-gen = 256

        [java]
        dir = "jre7/bin/java"
        major-version = 7
        "#,
    )
    .unwrap();

    let dir = Profile::find_dir(root.path().join("libraries")).unwrap();
    let proc = Profile::load(&dir).await.unwrap().to_process(&dir).unwrap();

    let cp = proc.build_classpath().unwrap();
    assert_eq!(cp.matches(CLASSPATH_SEPARATOR).count(), 1);
    assert!(cp.ends_with("lwjgl.jar"));

    let cmd = proc.build_command().unwrap();
    assert_eq!(
        cmd,
        [
            jre.join("bin").join("java").display().to_string(),
            "-Xmx2048M".into(),
            "-XX:MaxPermSize=256M".into(),
            "net.minecraft.launchwrapper.Launch".into(),
            "--tweakClass".into(),
            "cpw.mods.fml.common.launcher.FMLTweaker".into(),
        ]
    );
}

#[test]
fn classpath_is_passed_through_flags() {
    let proc = JavaProcess::new("Main").classpath("a.jar").classpath("b.jar");
    let cp = proc.build_classpath().unwrap();
    let cmd = proc.clone().flag("-cp").flag(cp.clone()).build_command().unwrap();
    assert_eq!(cmd[1..3], ["-cp".to_string(), cp]);
    // the classpath alone never shows up in the command line
    assert_eq!(proc.build_command().unwrap(), ["java", "Main"]);
}

#[test]
fn resolution_failure_is_not_masked() {
    let root = tempfile::tempdir().unwrap();
    let proc = JavaProcess::new("Main").runtime(JavaRuntime::new(root.path().join("nope"), 8));
    match proc.build_command() {
        Err(LaunchError::RuntimeNotFound { path }) => assert!(path.ends_with("nope")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn user_arguments_are_split() {
    let proc = JavaProcess::new("Main").args(split_args(r#"--server "mc.example.org" --port 25565"#));
    assert_eq!(
        proc.build_command().unwrap(),
        ["java", "Main", "--server", "mc.example.org", "--port", "25565"]
    );
}
