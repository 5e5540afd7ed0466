use blog_core::pagination::{OutOfRange, Paginator, DEFAULT_PAGE_SIZE, DEFAULT_RADIUS};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Data directory path
    #[arg(short, long, env = "BLOG_DATA")]
    pub data: PathBuf,

    /// Port to listen on, auto if not set
    #[arg(short, long, env = "BLOG_PORT")]
    pub port: Option<u16>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "RUST_LOG")]
    pub log_level: Option<String>,

    /// Log as json lines
    #[arg(long, env = "BLOG_LOG_JSON")]
    pub log_json: bool,

    /// Posts per listing page
    #[arg(
        long,
        env = "BLOG_PAGE_SIZE",
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub page_size: u64,

    /// Pages shown on each side of the current page
    #[arg(long, env = "BLOG_WINDOW_RADIUS", default_value_t = DEFAULT_RADIUS)]
    pub window_radius: u64,

    /// Answer for a page past the last one (last, not-found)
    #[arg(long, env = "BLOG_OUT_OF_RANGE", default_value_t = OutOfRange::NotFound)]
    pub out_of_range: OutOfRange,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub data: PathBuf,
    pub listen: SocketAddr,
    pub paginator: Paginator,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: PathBuf::from("."),
            listen: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
            paginator: Paginator::default(),
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            data: args.data.clone(),
            // port 0 lets the system pick one
            listen: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), args.port.unwrap_or(0)),
            paginator: Paginator::new(args.page_size, args.window_radius, args.out_of_range),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["BlogBackend", "--data", "/tmp/blog"]).unwrap();
        let config = Config::from(&args);
        assert_eq!(config.data, PathBuf::from("/tmp/blog"));
        assert_eq!(config.listen.port(), 0);
        assert_eq!(config.paginator, Paginator::default());
    }

    #[test]
    fn test_args_pagination() {
        let args = Args::try_parse_from([
            "BlogBackend",
            "--data",
            "/tmp/blog",
            "--port",
            "8000",
            "--page-size",
            "10",
            "--window-radius",
            "3",
            "--out-of-range",
            "last",
        ])
        .unwrap();
        let config = Config::from(&args);
        assert_eq!(config.listen.port(), 8000);
        assert_eq!(config.paginator, Paginator::new(10, 3, OutOfRange::Last));
    }

    #[test]
    fn test_args_reject_zero_page_size() {
        let err = Args::try_parse_from(["BlogBackend", "--data", "/tmp/blog", "--page-size", "0"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let args =
            Args::try_parse_from(["BlogBackend", "--data", "/tmp/blog", "--page-size", "1"])
                .unwrap();
        assert_eq!(Config::from(&args).paginator.page_size, 1);
    }
}
