//! # Build Layout Detection Module / 构建布局检测模块
//!
//! Determines whether a CMake build tree was produced by a multi-config
//! generator by reading the generator name persisted in `CMakeCache.txt`.
//! Multi-config generators place every configuration side by side in its own
//! subdirectory, which changes where example executables end up.
//!
//! 通过读取 `CMakeCache.txt` 中保存的生成器名称，判断 CMake 构建树是否由
//! 多配置生成器生成。多配置生成器会把每个配置放在各自的子目录中，
//! 这会改变示例可执行文件的位置。

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{
    core::models::HarnessError,
    infra::{command, t},
};

/// Cache file written by CMake at the root of every build tree.
pub const CACHE_FILE_NAME: &str = "CMakeCache.txt";

/// Cache entry holding the name of the generator used for the build.
pub const GENERATOR_KEY: &str = "CMAKE_GENERATOR:INTERNAL";

/// Generators whose names start with this prefix build all configurations
/// into per-configuration subdirectories.
pub const MULTICONFIG_GENERATOR_PREFIX: &str = "Visual Studio";

/// Returns the expected location of the cache file inside `build_root`.
pub fn cache_path(build_root: &Path) -> PathBuf {
    build_root.join(CACHE_FILE_NAME)
}

/// Reads the build cache under `build_root` and reports whether the tree
/// uses a multi-config layout.
///
/// A missing cache file means the examples were never built and yields
/// [`HarnessError::MissingBuildCache`]. A cache without a generator entry
/// only prints a warning and falls back to the single-config layout.
///
/// 读取 `build_root` 下的构建缓存并报告构建树是否使用多配置布局。
/// 缺少缓存文件意味着示例从未构建，返回 [`HarnessError::MissingBuildCache`]。
/// 缓存中没有生成器条目时只打印警告，并回退到单配置布局。
pub fn detect_multiconfig(build_root: &Path) -> Result<bool> {
    let path = cache_path(build_root);

    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(HarnessError::MissingBuildCache { path }.into());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                t!("layout.cache_read_failed", path = path.display()).to_string()
            });
        }
    };
    // Entries may hold paths in a legacy code page; only the generator matters.
    let contents = command::decode(&bytes);

    match find_generator(&contents) {
        Some(generator) => {
            let multi_config = is_multiconfig_generator(generator);
            tracing::debug!(generator, multi_config, "found CMake generator");
            Ok(multi_config)
        }
        None => {
            println!("{}", t!("layout.generator_not_found").yellow());
            Ok(false)
        }
    }
}

/// Extracts the generator name from the contents of a `CMakeCache.txt`.
///
/// Comment lines and lines without a `key=value` separator are skipped. The
/// first line whose key is exactly [`GENERATOR_KEY`] wins; its value is
/// returned with surrounding whitespace removed.
///
/// 从 `CMakeCache.txt` 的内容中提取生成器名称。
/// 跳过注释行和没有 `key=value` 分隔符的行。第一个键恰好为
/// [`GENERATOR_KEY`] 的行生效，返回去除首尾空白后的值。
pub fn find_generator(contents: &str) -> Option<&str> {
    contents
        .lines()
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| *key == GENERATOR_KEY)
        .map(|(_, value)| value.trim())
}

/// `true` if `generator` belongs to the multi-config generator family.
pub fn is_multiconfig_generator(generator: &str) -> bool {
    generator.starts_with(MULTICONFIG_GENERATOR_PREFIX)
}
