use std::path::PathBuf;

pub const DEFAULT_IGNORE: &str = ".git,node_modules,dist";
pub const DEFAULT_TAGS: &str = "TODO,FIXME,@next";
pub const DEFAULT_MIN_SCORE: i32 = 0;

pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}
