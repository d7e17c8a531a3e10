#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn tipcheck_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tipcheck").unwrap();
    cmd.env_remove("TIPCHECK_ROOT");
    cmd.env_remove("TIPCHECK_LOG");
    cmd
}

pub fn article(title: &str, permalink: &str, order: &str, published: bool) -> String {
    format!(
        "---\ntitle: \"{}\"\nlayout: tips\nsidenav: side-nav-tips.html\npublished: {}\npermalink: {}\ntype: markdown\norder: \"{}\"\n---\n\n{} body.\n",
        title, published, permalink, order, title
    )
}

pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
