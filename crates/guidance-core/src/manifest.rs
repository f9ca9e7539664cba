//! Rendering of the generated overview manifest (`guidance_list.md`).

use crate::settings::{DEFAULT_LANGUAGE, GUIDE_MARKER, GUIDE_SUFFIX};

const HEADER: &str = "# Guidance Overview\n\nGuides available in this bundle:\n\n";
const EMPTY_BODY: &str = "No guides are bundled.\n";

/// Derive the display name for a guide filename: strip the `.md` extension
/// and the `_guide_<default language>` suffix when present.
/// `vercel_guide_en.md` becomes `vercel`.
pub fn display_name(filename: &str) -> &str {
    let stem = filename.strip_suffix(GUIDE_SUFFIX).unwrap_or(filename);
    let marker = format!("{GUIDE_MARKER}{DEFAULT_LANGUAGE}");
    stem.strip_suffix(marker.as_str()).unwrap_or(stem)
}

/// Render the full manifest text for the given default-language guide
/// filenames. Output is fully regenerated on every init, never merged.
pub fn render(guides: &[String]) -> String {
    let mut out = String::from(HEADER);

    if guides.is_empty() {
        out.push_str(EMPTY_BODY);
        return out;
    }

    for filename in guides {
        out.push_str(&format!("- {} ({filename})\n", display_name(filename)));
    }

    out
}
