//! Helpers for rendering built tables as Rust constant declarations.

use core::fmt::{self, Display, Write};

const WIDTH: usize = 80;

/// Writes `pub const NAME: [TY; LEN] = [ ... ];`, wrapping the values to
/// fit within 80 columns.
pub(crate) fn write_table<W, T>(out: &mut W, name: &str, ty: &str, data: &[T]) -> fmt::Result
where
    W: Write + ?Sized,
    T: Display,
{
    writeln!(out)?;
    writeln!(out, "#[rustfmt::skip]")?;
    writeln!(out, "pub const {name}: [{ty}; {}] = [", data.len())?;
    write_values(out, data)?;
    writeln!(out, "];")
}

/// Writes comma-terminated values indented by four spaces, wrapping lines
/// before they exceed 80 columns.
pub(crate) fn write_values<W, T>(out: &mut W, data: &[T]) -> fmt::Result
where
    W: Write + ?Sized,
    T: Display,
{
    let mut line_len = 0;
    let mut item = alloc::string::String::new();
    for value in data {
        item.clear();
        write!(item, "{value},")?;
        if line_len > 0 && line_len + 1 + item.len() > WIDTH {
            writeln!(out)?;
            line_len = 0;
        }
        if line_len == 0 {
            out.write_str("    ")?;
            line_len = 4;
        } else {
            out.write_char(' ')?;
            line_len += 1;
        }
        out.write_str(&item)?;
        line_len += item.len();
    }
    if line_len > 0 {
        writeln!(out)?;
    }
    Ok(())
}
