//! Site configuration, loaded from a `marginalia.yaml` file. Only the
//! fields the content core consumes are modeled; renderer-facing settings
//! (theme, analytics, newsletter providers) live with the site itself.

use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Deserialize)]
struct PageSize(usize);
impl Default for PageSize {
    fn default() -> Self {
        PageSize(5)
    }
}

/// The on-disk shape of the config file.
#[derive(Deserialize)]
struct Site {
    title: String,
    author: String,

    #[serde(default)]
    description: Option<String>,

    site_url: Url,

    #[serde(default)]
    posts_per_page: PageSize,
}

/// Site configuration.
pub struct Config {
    /// The site title.
    pub title: String,

    /// The site author's display name.
    pub author: String,

    /// An optional one-line site description.
    pub description: Option<String>,

    /// The site's root URL. Always ends in a trailing slash: [`Url::join`]
    /// treats a base without one as having a trailing "file" component to
    /// replace, which would silently eat the last path segment when index
    /// and tag URLs are derived from this.
    pub site_url: Url,

    /// The number of posts per index page.
    pub posts_per_page: usize,
}

impl Config {
    /// Loads configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Config> {
        let file = File::open(path).map_err(|err| Error::Open {
            path: path.to_owned(),
            err,
        })?;
        let site: Site = serde_yaml::from_reader(file)?;
        Ok(Config::from_site(site))
    }

    fn from_site(site: Site) -> Config {
        let mut site_url = site.site_url;
        if !site_url.path().ends_with('/') {
            let path = format!("{}/", site_url.path());
            site_url.set_path(&path);
        }
        Config {
            title: site.title,
            author: site.author,
            description: site.description,
            site_url,
            posts_per_page: site.posts_per_page.0,
        }
    }
}

/// The result of loading configuration.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error loading configuration.
#[derive(Debug)]
pub enum Error {
    /// Returned for I/O problems opening the config file.
    Open { path: PathBuf, err: std::io::Error },

    /// Returned when there was an error parsing the config as YAML.
    DeserializeYaml(serde_yaml::Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Open { path, err } => {
                write!(f, "Opening config file `{}`: {}", path.display(), err)
            }
            Error::DeserializeYaml(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open { path: _, err } => Some(err),
            Error::DeserializeYaml(err) => Some(err),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts a [`serde_yaml::Error`] into an [`Error`]. It allows us to
    /// use the `?` operator for [`serde_yaml`] deserialization functions.
    fn from(err: serde_yaml::Error) -> Error {
        Error::DeserializeYaml(err)
    }
}
