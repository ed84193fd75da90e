/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::path::Path;
use std::time::Instant;

use log::{Level, LevelFilter};

/// Install a global logger writing to stdout, and optionally also to a file.
///
/// Messages from this workspace are shown down to `Trace`; everything else
/// down to `Debug`. Fails if a logger was already installed.
pub fn setup_global_logger(path: Option<&Path>) -> Result<(), failure::Error>
{
    let start = Instant::now();
    let mut fern = fern::Dispatch::new();
    fern = fern.format(move |out, message, record| {
            let t = start.elapsed();
            out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                t.as_secs(),
                t.subsec_millis(),
                record.target(),
                ColorizedLevel(record.level()),
                message))
        })
        .level(LevelFilter::Debug)
        .level_for("symcell", LevelFilter::Trace)
        .level_for("symcell_structure", LevelFilter::Trace)
        .chain(std::io::stdout());

    if let Some(path) = path {
        fern = fern.chain(fern::log_file(path)?);
    }

    fern.apply().map_err(|e| format_err!("{}", e))?;
    Ok(())
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level);

impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match self.0 {
            Level::Error => ansi_term::Colour::Red.bold(),
            Level::Warn  => ansi_term::Colour::Red.normal(),
            Level::Info  => ansi_term::Colour::Cyan.bold(),
            Level::Debug => ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(format!("{:<5}", self.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_painted() {
        let text = ColorizedLevel(Level::Warn).to_string();
        assert!(text.contains("WARN"));
        assert!(text.starts_with('\x1b'));
    }
}
