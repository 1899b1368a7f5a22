use anyhow::Context;
use clap::{App, AppSettings, Arg, SubCommand};
use std::io::Read;
use std::path::Path;

use marginalia::config::Config;
use marginalia::{footnotes, index, markdown, post, tag};

fn main() -> anyhow::Result<()> {
    let matches = App::new("marginalia")
        .about("Content core for a personal blog")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("footnotes")
                .about(
                    "Rewrites inline ^[...] footnotes in a markdown document \
                     and prints the document tree as YAML",
                )
                .arg(
                    Arg::with_name("FILE")
                        .help("Markdown source file (reads stdin when omitted)"),
                ),
        )
        .subcommand(
            SubCommand::with_name("index")
                .about(
                    "Computes tag counts and paginated post indices from post \
                     records and prints them as YAML",
                )
                .arg(
                    Arg::with_name("POSTS")
                        .required(true)
                        .help("YAML file containing a sequence of post records"),
                )
                .arg(
                    Arg::with_name("config")
                        .short("c")
                        .long("config")
                        .takes_value(true)
                        .default_value("marginalia.yaml")
                        .help("Site configuration file"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        ("footnotes", Some(sub)) => rewrite_footnotes(sub.value_of("FILE")),
        ("index", Some(sub)) => build_index(
            sub.value_of("POSTS").unwrap(),
            sub.value_of("config").unwrap(),
        ),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn rewrite_footnotes(path: Option<&str>) -> anyhow::Result<()> {
    let input = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading markdown file `{}`", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading markdown from stdin")?;
            buf
        }
    };

    let mut tree = markdown::parse(&input)?;
    footnotes::rewrite(&mut tree);
    print!("{}", serde_yaml::to_string(&tree)?);
    Ok(())
}

fn build_index(posts_path: &str, config_path: &str) -> anyhow::Result<()> {
    let config = Config::from_file(Path::new(config_path))?;
    let records = std::fs::read_to_string(posts_path)
        .with_context(|| format!("reading post records `{}`", posts_path))?;
    let posts = post::published(
        post::from_yaml(&records)
            .with_context(|| format!("parsing post records `{}`", posts_path))?,
    );

    let output = IndexOutput {
        tags: tag::tag_counts(&posts, &config.site_url)?,
        indices: index::build(&posts, &config.site_url, config.posts_per_page)?,
    };
    print!("{}", serde_yaml::to_string(&output)?);
    Ok(())
}

#[derive(serde::Serialize)]
struct IndexOutput<'a> {
    tags: Vec<tag::TagCount>,
    indices: Vec<index::Index<'a>>,
}
