use std::io::Write;

use crate::error::HarnessError;
use crate::render::{trim_capture, RenderMode, Renderer};
use crate::scanner::PngEntry;

#[derive(Default, Debug)]
pub struct Counters {
    pub compared: usize,
}

/// Runs the comparison loop: one block per entry, spatial then DCT then
/// viewer, followed by the display step. A single failed invocation aborts
/// the whole run; blocks already flushed for earlier files stay visible.
pub fn run_compare<W: Write>(
    entries: &[PngEntry],
    renderer: &dyn Renderer,
    out: &mut W,
    show_display: bool,
) -> Result<Counters, HarnessError> {
    let mut counters = Counters::default();

    for entry in entries {
        let s = trim_capture(renderer.render(&entry.path, RenderMode::Spatial)?);
        let d = trim_capture(renderer.render(&entry.path, RenderMode::Dct)?);
        let t = trim_capture(renderer.render(&entry.path, RenderMode::Viewer)?);

        write_comparison_block(out, &s, &d, &t, &entry.name)?;

        // The display script writes to the same terminal from its own
        // process; flush so the buffered block lands first.
        out.flush()?;

        if show_display {
            renderer.display(&entry.path)?;
        }
        counters.compared += 1;
    }

    Ok(counters)
}

/// Block format: `<s>  <d>  <t><filename> \n\n` — two-space separators, no
/// separator before the filename, one space after it, then a blank line.
pub fn write_comparison_block<W: Write>(
    out: &mut W,
    s: &[u8],
    d: &[u8],
    t: &[u8],
    name: &str,
) -> Result<(), HarnessError> {
    out.write_all(s)?;
    out.write_all(b"  ")?;
    out.write_all(d)?;
    out.write_all(b"  ")?;
    out.write_all(t)?;
    out.write_all(name.as_bytes())?;
    out.write_all(b" \n\n")?;
    Ok(())
}
