use clap::Clap;
use textrule::pipeline::AnalysisKind;
use textrule::{lang, store::ResultEntry};

#[derive(Clap)]
#[clap(version = "1.0")]
struct Opts {
    text: String,
    #[clap(long, short, default_value = "hu")]
    lang: String,
    #[clap(long, short)]
    keyword: Option<String>,
    #[clap(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let analyzer = lang::analyzer(&opts.lang).unwrap();

    let seo: ResultEntry = analyzer
        .analyze(&opts.text, opts.keyword.as_deref(), AnalysisKind::Seo)
        .unwrap();
    let readability: ResultEntry = analyzer
        .analyze(&opts.text, None, AnalysisKind::Readability)
        .unwrap();

    if opts.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&(&seo, &readability)).unwrap()
        );
    } else {
        println!("{:#?}", seo);
        println!("{:#?}", readability);
    }
}
