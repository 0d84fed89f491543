use log::debug;
use std::fmt::{self, Write};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const HEADER: &str = "// Generated by bin2cpp\n";
const INCLUDES: &[&str] = &["<array>", "<cstddef>", "<cstdint>"];
const INDENT: &str = "    ";
const ELEMENTS_PER_LINE: usize = 4;
const BODY_OPEN: &str = " = {\n";

/// `myArray` -> `MYARRAY_SIZE`. Non-ASCII characters pass through unchanged.
pub fn size_constant_name(name: &str) -> String {
    format!("{}_SIZE", name.to_ascii_uppercase())
}

/// Renders `bytes` as a C++ `std::array` named `name` plus its size constant.
pub fn render(bytes: &[u8], name: &str) -> String {
    let mut out = String::with_capacity(128 + bytes.len() * 6);
    // Writing into a String cannot fail.
    let _ = render_into(&mut out, bytes, name);
    out
}

fn render_into(out: &mut String, bytes: &[u8], name: &str) -> fmt::Result {
    let size_name = size_constant_name(name);

    out.push_str(HEADER);
    for include in INCLUDES {
        writeln!(out, "#include {}", include)?;
    }
    writeln!(out)?;
    writeln!(out, "constexpr std::size_t {} = {};\n", size_name, bytes.len())?;
    write!(
        out,
        "constexpr std::array<std::uint8_t, {}> {}{}{}",
        size_name, name, BODY_OPEN, INDENT
    )?;
    for (index, byte) in bytes.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
            if index % ELEMENTS_PER_LINE == 0 {
                out.push('\n');
                out.push_str(INDENT);
            }
        }
        write!(out, "0x{:02x}", byte)?;
    }
    out.push_str("};\n");
    Ok(())
}

/// Reads the element list back out of a rendered artifact.
pub fn parse_elements(text: &str) -> Option<Vec<u8>> {
    let body_start = text.find(BODY_OPEN)? + BODY_OPEN.len();
    let body_end = body_start + text[body_start..].find("};")?;
    let body = text[body_start..body_end].trim();
    if body.is_empty() {
        return Some(Vec::new());
    }

    body.split(',')
        .map(|element| {
            let hex = element.trim().strip_prefix("0x")?;
            u8::from_str_radix(hex, 16).ok()
        })
        .collect()
}

/// Replaces the contents of `path` via a temporary sibling and a rename, so
/// readers never observe a half-written artifact. Symlinks are followed and
/// an existing file keeps its permissions.
pub fn write_artifact(path: &Path, text: &str) -> Result<()> {
    let existing = fs::metadata(path).ok();
    let target = match &existing {
        Some(_) => fs::canonicalize(path).map_err(|err| Error::io(path, err))?,
        None => path.to_path_buf(),
    };
    let tmp_path = temp_sibling(&target);
    debug!("writing {} via {}", target.display(), tmp_path.display());

    let written = fs::write(&tmp_path, text).and_then(|()| match &existing {
        Some(metadata) => fs::set_permissions(&tmp_path, metadata.permissions()),
        None => Ok(()),
    });
    if let Err(err) = written.and_then(|()| fs::rename(&tmp_path, &target)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::io(path, err));
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    path.with_file_name(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()))
}
