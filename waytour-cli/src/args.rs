use clap::{Arg, ArgAction, ArgMatches, Command};

pub const INPUT_ARG_NAME: &str = "INPUT";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";
pub const PLOT_ARG_NAME: &str = "plot";
pub const MATCHER_ARG_NAME: &str = "matcher";
pub const QUIET_ARG_NAME: &str = "quiet";

pub fn get_arg_matches() -> ArgMatches {
    get_app().get_matches()
}

pub fn get_app() -> Command {
    Command::new("Waytour")
        .version("0.1")
        .about("Plans an approximate shortest visiting order over points from a KML file")
        .arg(Arg::new(INPUT_ARG_NAME).help("Sets the KML file to use").required(true).index(1))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for the planned tour in json format")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(PLOT_ARG_NAME)
                .help("Specifies path to a bitmap file for the tour plot")
                .short('p')
                .long(PLOT_ARG_NAME)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(MATCHER_ARG_NAME)
                .help("Specifies how points are compared for equality")
                .short('m')
                .long(MATCHER_ARG_NAME)
                .value_parser(["coordinates", "name"])
                .default_value("coordinates"),
        )
        .arg(
            Arg::new(QUIET_ARG_NAME)
                .help("Suppresses info logging")
                .short('q')
                .long(QUIET_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}
