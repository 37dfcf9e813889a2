//! Output naming and size display helpers
//!
//! Part of the observable output contract: the `.wgg` artifact name is
//! derived from the source file name, and sizes are displayed in binary
//! (1024-based) units the same way the reference consumer does.

/// Source extension recognized on input names (matched case-insensitively).
pub const LUA_EXT: &str = ".lua";

/// Extension carried by encrypted artifacts.
pub const WGG_EXT: &str = ".wgg";

/// Derive the `.wgg` artifact name from a source file name.
///
/// A trailing `.lua` is stripped regardless of its case; the rest of the
/// name keeps its casing untouched. Names without the extension simply get
/// `.wgg` appended.
pub fn wgg_file_name(source_name: &str) -> String {
    let bytes = source_name.as_bytes();
    let stem = match bytes.len().checked_sub(LUA_EXT.len()) {
        Some(i) if bytes[i..].eq_ignore_ascii_case(LUA_EXT.as_bytes()) => &source_name[..i],
        _ => source_name,
    };
    format!("{}{}", stem, WGG_EXT)
}

/// Format a byte count using binary magnitude units.
///
/// Picks the largest unit with a mantissa of at least one and renders at
/// most two decimal places, trimming trailing zeros. Display-only; nothing
/// parses this back.
pub fn format_bytes(n: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if n == 0 {
        return "0 B".to_string();
    }

    let magnitude = ((63 - n.leading_zeros()) / 10) as usize;
    let magnitude = magnitude.min(UNITS.len() - 1);
    let value = n as f64 / 1024f64.powi(magnitude as i32);

    let mut rendered = format!("{:.2}", value);
    if rendered.contains('.') {
        while rendered.ends_with('0') {
            rendered.pop();
        }
        if rendered.ends_with('.') {
            rendered.pop();
        }
    }

    format!("{} {}", rendered, UNITS[magnitude])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_extension_replaced() {
        assert_eq!(wgg_file_name("script.lua"), "script.wgg");
    }

    #[test]
    fn test_uppercase_extension_replaced_stem_untouched() {
        assert_eq!(wgg_file_name("SCRIPT.LUA"), "SCRIPT.wgg");
        assert_eq!(wgg_file_name("MixedCase.Lua"), "MixedCase.wgg");
    }

    #[test]
    fn test_other_extension_kept() {
        assert_eq!(wgg_file_name("data.txt"), "data.txt.wgg");
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(wgg_file_name("script"), "script.wgg");
    }

    #[test]
    fn test_bare_extension() {
        assert_eq!(wgg_file_name(".lua"), ".wgg");
    }

    #[test]
    fn test_extension_in_middle_kept() {
        assert_eq!(wgg_file_name("script.lua.bak"), "script.lua.bak.wgg");
    }

    #[test]
    fn test_non_ascii_stem() {
        assert_eq!(wgg_file_name("skript-ü.lua"), "skript-ü.wgg");
        // Name shorter than the extension, and multibyte at that.
        assert_eq!(wgg_file_name("ü"), "ü.wgg");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_bytes(0), "0 B");
    }

    #[test]
    fn test_format_bytes_under_one_kilobyte() {
        assert_eq!(format_bytes(1), "1 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1023), "1023 B");
    }

    #[test]
    fn test_format_whole_units() {
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1024 * 1024), "1 MB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1 GB");
        assert_eq!(format_bytes(1024u64.pow(4)), "1 TB");
    }

    #[test]
    fn test_format_fractional_values() {
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(10496), "10.25 KB");
        assert_eq!(format_bytes(1024 * 1024 + 512 * 1024), "1.5 MB");
    }

    #[test]
    fn test_format_beyond_largest_unit_clamps() {
        assert_eq!(format_bytes(1024u64.pow(5)), "1024 TB");
    }
}
