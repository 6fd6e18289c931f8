//! Fixed-width rendering of `file:line` call-sites.
//!
//! A call-site column is always exactly `width` characters wide. Short
//! call-sites are right-padded. Long ones keep the file name, its parent
//! directory and the full line number, and lose characters from the left:
//!
//! ```text
//! logging/logger.go:42
//! …ternal/world/terrain/heightmap_generator.go:1187
//! ```
//!
//! The second line above, rendered at 22 columns, becomes
//! `…p_generator.go:1187` followed by padding.

/// Path separator used by call-site files.
pub const PATH_SEPARATOR: char = '/';

/// Leading marker for truncated call-sites.
pub const ELLIPSIS: char = '…';

/// Characters reserved in the truncation budget for the ellipsis marker
/// and separators, on top of the line number digits and the colon.
const RESERVED: usize = 3;

/// The trailing `segments` path components of `file`, joined again.
///
/// Paths with `segments` or fewer components are returned unchanged.
pub fn shorten_path(file: &str, segments: usize) -> &str {
    if segments == 0 {
        return file;
    }
    let mut seen = 0;
    for (idx, ch) in file.char_indices().rev() {
        if ch == PATH_SEPARATOR {
            seen += 1;
            if seen == segments {
                return &file[idx + ch.len_utf8()..];
            }
        }
    }
    file
}

/// Render `file:line` into exactly `width` visible columns, unless even the
/// bare `…:line` form is wider than `width`. The line number is never cut.
pub fn fit(file: &str, line: u32, width: usize) -> String {
    let full = format!("{file}:{line}");
    let len = full.chars().count();
    if len <= width {
        return pad(full, width);
    }
    pad(truncate(file, line, width), width)
}

/// Truncated form `…<tail of parent/file>:<line>`.
fn truncate(file: &str, line: u32, width: usize) -> String {
    let line_num = line.to_string();
    let important = important_parts(file);

    let max_path_width = width
        .saturating_sub(RESERVED)
        .saturating_sub(line_num.len())
        .saturating_sub(1);

    let important_len = important.chars().count();
    let tail = if important_len > max_path_width {
        let skip = important_len - max_path_width;
        important.chars().skip(skip).collect()
    } else {
        important.to_string()
    };

    format!("{ELLIPSIS}{tail}:{line_num}")
}

/// The last path segment, prefixed by its parent directory when it has one.
fn important_parts(file: &str) -> &str {
    shorten_path(file, 2)
}

fn pad(mut s: String, width: usize) -> String {
    let len = s.chars().count();
    if len < width {
        s.extend(std::iter::repeat_n(' ', width - len));
    }
    s
}
