// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_extensions() -> Vec<String> {
    vec![".png".to_string(), ".jpg".to_string(), ".jpeg".to_string()]
}

pub(crate) fn default_target_extension() -> String {
    ".webp".to_string()
}

pub(crate) fn default_ignore_marker() -> String {
    "webp-ignore".to_string()
}

pub(crate) fn default_inline_marker() -> String {
    "?inline".to_string()
}

pub(crate) fn default_loader() -> String {
    "require".to_string()
}

pub(crate) fn default_support_predicate() -> String {
    "window.isSupportWebp".to_string()
}
