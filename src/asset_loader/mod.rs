pub mod img_loader;
pub mod obj_loader;

/// Resolves an asset filename to a path that actually exists on disk.
///
/// Checks `ASSET_DIR` first, then the literal filename (it may already be a
/// usable relative/absolute path from the scene file's own directory), then
/// `assets/<name>` up to six directories above the working directory. Note
/// `std::fs::exists` returns `Ok(false)` for a path that is merely absent
/// (not an error) — an earlier revision of this search checked `.is_ok()`,
/// which is true in both cases and effectively disabled the search.
pub(crate) fn build_asset_path(asset_filename: &str) -> Option<String> {
    if let Ok(dir) = std::env::var("ASSET_DIR") {
        let candidate = dir + asset_filename;
        if std::fs::exists(&candidate).unwrap_or(false) {
            return Some(candidate);
        }
    }

    if std::fs::exists(asset_filename).unwrap_or(false) {
        return Some(asset_filename.to_string());
    }

    let mut prefix = String::from("assets/");
    for _ in 0..6 {
        let candidate = prefix.clone() + asset_filename;
        if std::fs::exists(&candidate).unwrap_or(false) {
            return Some(candidate);
        }
        prefix = "../".to_owned() + &prefix;
    }

    None
}
