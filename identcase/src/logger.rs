use fern::Dispatch;
use log::LevelFilter;
use std::io;

/// Map the `-v` count to a level filter.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Error, // default
        1 => LevelFilter::Warn,  // -v
        2 => LevelFilter::Info,  // -vv
        3 => LevelFilter::Debug, // -vvv
        _ => LevelFilter::Trace, // -vvvv
    }
}

/// Log to stderr so converted values on stdout can be piped.
pub fn setup_logger(verbose: u8) -> Result<(), log::SetLoggerError> {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(level_for(verbose))
        .chain(io::stderr())
        .apply()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), LevelFilter::Error);
        assert_eq!(level_for(1), LevelFilter::Warn);
        assert_eq!(level_for(2), LevelFilter::Info);
        assert_eq!(level_for(3), LevelFilter::Debug);
        assert_eq!(level_for(4), LevelFilter::Trace);
        assert_eq!(level_for(u8::MAX), LevelFilter::Trace);
    }
}
