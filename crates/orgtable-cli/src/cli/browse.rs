//! The interactive loop behind `orgtable browse`.
//!
//! Reads one command per line, applies it to the session and re-renders. Bad input
//! prints an error and keeps the loop alive; `quit` or end of input stops it.

use std::io::{self, BufRead, Write};

use orgtable::api::OrgTableApi;
use orgtable::session::Action;
use orgtable::source::RecordSource;
use orgtable::store::{LoadOutcome, SnapshotBackend};

use super::render::{render_page, Provenance};
use super::styles;

pub const HELP: &str = "\
Commands:
  company <text>        filter by company name (empty clears)
  industry <text>       filter by industry (empty clears)
  sort <column> [dir]   toggle sort on a column, or set asc|desc|none
  next | prev           move one page
  page <n>              jump to page n
  size <n>              rows per page
  clear                 drop both filters
  reload                fetch records again
  help                  show this text
  quit                  leave
Columns: name, industries, amount, round, valuation, stage, year
";

pub fn provenance<S: RecordSource, B: SnapshotBackend>(api: &OrgTableApi<S, B>) -> Provenance {
    Provenance {
        origin: api.origin(),
        refresh_failed: matches!(api.last_load(), Some(LoadOutcome::Retained { .. })),
    }
}

fn draw<S, B, W>(api: &mut OrgTableApi<S, B>, out: &mut W) -> io::Result<()>
where
    S: RecordSource,
    B: SnapshotBackend,
    W: Write,
{
    let provenance = provenance(api);
    let page = render_page(api.view(), &provenance);
    write!(out, "{}", page)
}

pub fn run_loop<S, B, R, W>(api: &mut OrgTableApi<S, B>, input: R, out: &mut W) -> io::Result<()>
where
    S: RecordSource,
    B: SnapshotBackend,
    R: BufRead,
    W: Write,
{
    draw(api, out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "{} ", styles::PROMPT.apply_to(">"))?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let command = line.trim();

        match command {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" | "?" => {
                write!(out, "{}", HELP)?;
                continue;
            }
            _ => {}
        }

        match command.parse::<Action>() {
            Ok(action) => {
                tracing::debug!(?action, "applying");
                api.apply(action);
                draw(api, out)?;
            }
            Err(e) => {
                writeln!(out, "{} {}", styles::ERROR.apply_to("Error:"), e)?;
                writeln!(out, "Type `help` for commands.")?;
            }
        }
    }
    Ok(())
}
