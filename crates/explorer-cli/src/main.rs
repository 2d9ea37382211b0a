//! `explorer` command line

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use explorer_api::{DashboardApi, HttpDashboardApi};
use explorer_cli::{
    fetch_filter_options, init_tracing, render_campaign, render_dashboards,
    render_filter_options, run_campaign, AppConfig, CampaignArgs, FormArgs,
};
use explorer_dashboards::{all_dashboards, Breakdown, DashboardName};
use std::path::PathBuf;
use std::sync::Arc;

/// Argument ids of one form: countries, regions, genders, ages, professions, keyword, exclude
type FormIds = [&'static str; 7];

const DRILL_DOWN: FormIds = [
    "countries",
    "regions",
    "genders",
    "ages",
    "professions",
    "keyword",
    "exclude",
];
const COMPARE_TO: FormIds = [
    "compare-countries",
    "compare-regions",
    "compare-genders",
    "compare-ages",
    "compare-professions",
    "compare-keyword",
    "compare-exclude",
];

fn form_args(ids: FormIds, heading: &'static str) -> Vec<Arg> {
    let list = |id: &'static str, help: &'static str| {
        Arg::new(id)
            .long(id)
            .action(ArgAction::Append)
            .value_delimiter(',')
            .help_heading(heading)
            .help(help)
    };
    vec![
        list(ids[0], "Country alpha-2 codes"),
        list(ids[1], "Region keys of the single selected country"),
        list(ids[2], "Genders"),
        list(ids[3], "Ages"),
        list(ids[4], "Professions"),
        Arg::new(ids[5])
            .long(ids[5])
            .help_heading(heading)
            .help("Only responses containing this keyword"),
        Arg::new(ids[6])
            .long(ids[6])
            .help_heading(heading)
            .help("Exclude responses containing this keyword"),
    ]
}

fn read_form(args: &ArgMatches, ids: FormIds) -> FormArgs {
    let list = |id: &str| -> Vec<String> {
        args.get_many::<String>(id)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    };
    FormArgs {
        countries: list(ids[0]),
        regions: list(ids[1]),
        genders: list(ids[2]),
        ages: list(ids[3]),
        professions: list(ids[4]),
        keyword: args.get_one::<String>(ids[5]).cloned(),
        exclude: args.get_one::<String>(ids[6]).cloned(),
    }
}

fn dashboard_arg() -> Arg {
    Arg::new("dashboard")
        .long("dashboard")
        .short('d')
        .required(true)
        .value_parser(value_parser!(DashboardName))
        .help("Dashboard slug, e.g. whatwomenwant or midwivesvoices")
}

fn cli() -> Command {
    Command::new("explorer")
        .version(explorer_cli::VERSION)
        .about("Survey Explorer dashboards from the command line")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .help("Base URL of the dashboard API"),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .global(true)
                .help("Language of labels and translated responses"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Default log filter when RUST_LOG is unset"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .subcommand(Command::new("dashboards").about("List the dashboards and their policies"))
        .subcommand(
            Command::new("filter-options")
                .about("Show the filter options of a dashboard")
                .arg(dashboard_arg()),
        )
        .subcommand(
            Command::new("campaign")
                .about("Compare two filtered sets of responses")
                .arg(dashboard_arg())
                .arg(
                    Arg::new("breakdown")
                        .long("breakdown")
                        .value_parser(value_parser!(Breakdown))
                        .help("Histogram breakdown, e.g. breakdown-country"),
                )
                .args(form_args(DRILL_DOWN, "Drill down"))
                .args(form_args(COMPARE_TO, "Compare to")),
        )
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<AppConfig> {
    let path = matches.get_one::<PathBuf>("config");
    let mut config = AppConfig::load(path.map(PathBuf::as_path))?;
    if let Some(url) = matches.get_one::<String>("api-url") {
        config.api_url = Some(url.clone());
    }
    if let Some(lang) = matches.get_one::<String>("lang") {
        config.lang = lang.clone();
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.log_level = level.clone();
    }
    Ok(config)
}

fn connect(config: &AppConfig) -> anyhow::Result<Arc<dyn DashboardApi>> {
    let api = HttpDashboardApi::new(config.api()?).context("cannot create API client")?;
    Ok(Arc::new(api))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    let config = load_config(&matches)?;
    let json = matches.get_flag("json");
    init_tracing(&config.log_level, json);
    tracing::debug!(version = explorer_cli::VERSION, lang = %config.lang, "starting");

    match matches.subcommand() {
        Some(("dashboards", _)) => {
            if json {
                let configs: Vec<_> = all_dashboards().collect();
                println!("{}", serde_json::to_string_pretty(&configs)?);
            } else {
                print!("{}", render_dashboards(all_dashboards()));
            }
        }
        Some(("filter-options", args)) => {
            let dashboard = *args
                .get_one::<DashboardName>("dashboard")
                .context("missing dashboard")?;
            let api = connect(&config)?;
            let options = fetch_filter_options(api.as_ref(), dashboard, &config).await;
            if json {
                println!("{}", serde_json::to_string_pretty(options.as_ref())?);
            } else {
                print!("{}", render_filter_options(&options));
            }
        }
        Some(("campaign", args)) => {
            let dashboard = *args
                .get_one::<DashboardName>("dashboard")
                .context("missing dashboard")?;
            let campaign_args = CampaignArgs {
                drill_down: read_form(args, DRILL_DOWN),
                compare_to: read_form(args, COMPARE_TO),
                breakdown: args.get_one::<Breakdown>("breakdown").copied(),
            };
            let api = connect(&config)?;
            let report = run_campaign(api, dashboard, &campaign_args, &config).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report.to_json())?);
            } else {
                print!("{}", render_campaign(&report));
            }
        }
        _ => unreachable!("subcommand is required"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn campaign_forms_parse_repeated_and_delimited_values() {
        let matches = cli()
            .try_get_matches_from([
                "explorer",
                "campaign",
                "-d",
                "whatwomenwant",
                "--countries",
                "PK,MX",
                "--countries",
                "NG",
                "--compare-genders",
                "Female",
                "--keyword",
                "water",
            ])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        let drill_down = read_form(args, DRILL_DOWN);
        assert_eq!(drill_down.countries, vec!["PK", "MX", "NG"]);
        assert_eq!(drill_down.keyword.as_deref(), Some("water"));
        assert_eq!(read_form(args, COMPARE_TO).genders, vec!["Female"]);
    }
}
