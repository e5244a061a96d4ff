use clap::{Parser, Subcommand};
use folio::listing::base_segment;
use folio::{FolioError, Pagination, Site};
use log::debug;
use serde::Serialize;
use std::path::PathBuf;

/// Prepares blog views from a content directory and prints them as JSON.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Directory holding posts.json, category-data.json and friends
    #[arg(short, long, default_value = ".")]
    content: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Numbered table of contents of a post
    Toc { slug: String },
    /// Full post view: toc, taxonomy links, neighbours, authors
    Post { slug: String },
    /// Alphabetical index of every category
    Categories,
    /// Sidebar category tree as rendered on `path`
    Sidebar {
        #[arg(long, default_value = "/blog")]
        path: String,
    },
    /// Listing of one category, by route parameter
    Category { param: String },
    /// Route parameters for every category page
    Params,
    /// Home page cards
    Home,
    /// One page of the main listing
    Blog {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Tag cloud with font sizes
    Tags,
    /// Previous/next links for a page; needs no content
    Paginate {
        #[arg(long)]
        current: u32,
        #[arg(long)]
        total: u32,
        /// Route of the listing, its first segment is the link base
        #[arg(long, default_value = "/blog")]
        path: String,
    },
}

fn print<T: Serialize>(value: &T) -> Result<(), FolioError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), FolioError> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("{:?}", cli);

    let site = || Site::builder().with_content_dir(&cli.content).build();

    match cli.command {
        Command::Paginate { current, total, path } => {
            let pagination = Pagination::new(current, total)?;
            print(&pagination.links(base_segment(&path)))
        }
        Command::Toc { slug } => print(&site()?.post(&slug)?.toc),
        Command::Post { slug } => print(&site()?.post(&slug)?),
        Command::Categories => print(&site()?.category_index()),
        Command::Sidebar { path } => print(&site()?.sidebar(&path)),
        Command::Category { param } => print(&site()?.category_page(&param)?),
        Command::Params => print(&site()?.category_params()),
        Command::Home => print(&site()?.home()),
        Command::Blog { page } => print(&site()?.blog_page(page)?),
        Command::Tags => print(&site()?.tag_cloud()),
    }
}
