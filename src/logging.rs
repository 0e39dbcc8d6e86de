use env_logger::{Env, Target};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Routes `log` output to `path`, appending `<timestamp> - <LEVEL> - <message>` lines.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                buf.timestamp(),
                record.level(),
                record.args()
            )
        })
        .try_init()?;

    Ok(())
}
