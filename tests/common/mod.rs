// Shared test helpers for integration tests
#![allow(dead_code)]

use example_runner::models::EXAMPLES;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// A cache file as CMake writes it, with the generator entry filled in.
pub fn cmake_cache(generator: &str) -> String {
    format!(
        r#"# This is the CMakeCache file.
# For build in directory: /home/user/slang-webgpu/build
# It was generated by CMake: /usr/bin/cmake
# You can edit this file to change values found and used by cmake.

########################
# EXTERNAL cache entries
########################

//Choose the type of build, options are: None Debug Release RelWithDebInfo MinSizeRel ...
CMAKE_BUILD_TYPE:STRING=Debug

########################
# INTERNAL cache entries
########################

//Name of external makefile project generator.
CMAKE_EXTRA_GENERATOR:INTERNAL=
//Name of generator.
CMAKE_GENERATOR:INTERNAL={generator}
//Generator instance identifier.
CMAKE_GENERATOR_INSTANCE:INTERNAL=
"#
    )
}

/// A throwaway build tree living in a temporary directory.
pub struct BuildTree {
    dir: TempDir,
}

impl BuildTree {
    /// An empty build tree without `CMakeCache.txt`.
    pub fn unbuilt() -> Self {
        let dir = tempdir().expect("Failed to create temporary directory");
        Self { dir }
    }

    /// A build tree whose cache names `generator`.
    pub fn with_generator(generator: &str) -> Self {
        Self::with_cache(&cmake_cache(generator))
    }

    /// A build tree whose cache file holds exactly `contents`.
    pub fn with_cache(contents: &str) -> Self {
        let tree = Self::unbuilt();
        fs::write(tree.path().join("CMakeCache.txt"), contents)
            .expect("Failed to write CMakeCache.txt");
        tree
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Directory the build system puts `example` into.
    pub fn example_dir(&self, example: &str, config: Option<&str>) -> PathBuf {
        let mut dir = self.path().join("examples").join(example);
        if let Some(config) = config {
            dir.push(config);
        }
        dir
    }

    /// Installs a fake example that prints `stdout` and `stderr` and exits
    /// with `exit_code`.
    #[cfg(unix)]
    pub fn add_example(
        &self,
        example: &str,
        config: Option<&str>,
        stdout: &str,
        stderr: &str,
        exit_code: i32,
    ) -> PathBuf {
        let script = format!(
            "#!/bin/sh\ncat <<'__STDOUT__'\n{stdout}\n__STDOUT__\ncat >&2 <<'__STDERR__'\n{stderr}\n__STDERR__\nexit {exit_code}\n"
        );
        self.add_script(example, config, &script)
    }

    /// Installs a fake example running an arbitrary shell script.
    #[cfg(unix)]
    pub fn add_script(&self, example: &str, config: Option<&str>, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let dir = self.example_dir(example, config);
        fs::create_dir_all(&dir).expect("Failed to create example directory");
        let path = dir.join(format!("slang_webgpu_example_{example}"));
        fs::write(&path, script).expect("Failed to write example script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make example executable");
        path
    }

    /// Installs every example of the fixed list as a passing example.
    #[cfg(unix)]
    pub fn add_all_passing(&self, config: Option<&str>) {
        for example in EXAMPLES {
            self.add_example(
                example,
                config,
                &format!("INFO: running {example}\nWARNING: adapter limits are low\nINFO: done"),
                "",
                0,
            );
        }
    }
}
