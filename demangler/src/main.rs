#[macro_use]
extern crate clap;
extern crate demangler_lib;
extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate failure_derive;
#[macro_use]
extern crate log;
extern crate termcolor;

use clap::{App, Arg, ArgMatches};

use termcolor::ColorChoice as CC;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use demangler_lib::parser::{Options, Recovery, Terminator};
use demangler_lib::{decode_with, Error};

use std::io::prelude::*;
use std::io::stdin;
use std::process::exit;

type Result<T> = ::std::result::Result<T, CliError>;

#[derive(Debug, Fail)]
enum CliError {
    #[fail(display = "IO error occured: {}", _0)]
    IoError(#[cause] ::std::io::Error),
    #[fail(display = "Invalid value for --max-depth: {}", _0)]
    InvalidDepth(String),
}

impl From<::std::io::Error> for CliError {
    fn from(e: ::std::io::Error) -> Self {
        CliError::IoError(e)
    }
}

arg_enum! {
    #[derive(PartialEq, Debug, Clone, Copy)]
    enum ColorChoice {
        Always,
        AlwaysAnsi,
        Auto,
        Never
    }
}

impl Into<CC> for ColorChoice {
    fn into(self) -> CC {
        use self::ColorChoice::*;
        match self {
            Always => CC::Always,
            AlwaysAnsi => CC::AlwaysAnsi,
            Auto => CC::Auto,
            Never => CC::Never,
        }
    }
}

fn main() {
    env_logger::init();
    let matches = App::new("Demangler")
        .version(crate_version!())
        .author("Delma")
        .about("Turns mangled function symbols back into readable signatures.\n\nReads symbols from standard input, one per line, when none are given.")
        .arg(Arg::with_name("SYMBOL")
            .multiple(true)
            .help("Mangled symbols to decode.")
            .index(1))
        .arg(Arg::with_name("permissive")
            .short("p")
            .long("permissive")
            .help("Keeps an unparsable function spec as an unparsed marker instead of failing."))
        .arg(Arg::with_name("optional-terminator")
            .short("t")
            .long("optional-terminator")
            .help("Accepts function specs without the trailing terminator."))
        .arg(Arg::with_name("max-depth")
            .short("d")
            .long("max-depth")
            .takes_value(true)
            .value_name("N")
            .help("Sets how deeply type lists may nest."))
        .arg(Arg::with_name("color")
                .short("c")
                .long("color")
                .takes_value(true)
                .possible_values(&ColorChoice::variants())
                .case_insensitive(true)
                .help("Sets the mode of coloring of the output."))
        .get_matches();
    match run(&matches) {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(e) => {
            eprintln!("{}", e);
            exit(2);
        }
    }
}

fn error_style() -> ColorSpec {
    let mut s = ColorSpec::new();
    s.set_fg(Some(Color::Red));
    s.set_intense(true);
    s.set_bold(true);
    s
}

fn highlight_style() -> ColorSpec {
    let mut s = ColorSpec::new();
    s.set_fg(Some(Color::Green));
    s
}

fn options(args: &ArgMatches) -> Result<Options> {
    let mut options = Options::default();
    if args.is_present("permissive") {
        options = options.with_recovery(Recovery::Permissive);
    }
    if args.is_present("optional-terminator") {
        options = options.with_terminator(Terminator::Optional);
    }
    if let Some(depth) = args.value_of("max-depth") {
        let depth = depth
            .parse()
            .map_err(|_| CliError::InvalidDepth(depth.to_owned()))?;
        options = options.with_max_depth(depth);
    }
    Ok(options)
}

fn position(error: &Error) -> Option<usize> {
    match *error {
        Error::Parse(ref e) => Some(e.position()),
        Error::Print(_) => None,
    }
}

/// Writes the outcome of one symbol. Returns whether decoding succeeded.
fn demangle_line(symbol: &str, options: &Options, out: &mut StandardStream) -> Result<bool> {
    match decode_with(symbol, options) {
        Ok(signature) => {
            out.set_color(&highlight_style())?;
            write!(out, "{}", signature)?;
            out.reset()?;
            writeln!(out)?;
            Ok(true)
        }
        Err(e) => {
            info!("Failed to decode {:?}: {:?}", symbol, e);
            out.set_color(&error_style())?;
            write!(out, "Decoding failed:")?;
            out.reset()?;
            writeln!(out, " {}", e)?;
            if let Some(position) = position(&e) {
                writeln!(out, "  {}", symbol)?;
                writeln!(out, "  {}^", " ".repeat(position))?;
            }
            Ok(false)
        }
    }
}

fn run(args: &ArgMatches) -> Result<bool> {
    let options = options(args)?;
    debug!("Decoding with {:?}", options);
    let mut out = StandardStream::stdout(
        value_t!(args.value_of("color"), ColorChoice)
            .unwrap_or_else(|_| ColorChoice::Auto)
            .into(),
    );
    let mut all_decoded = true;
    if let Some(symbols) = args.values_of("SYMBOL") {
        for symbol in symbols {
            all_decoded &= demangle_line(symbol, &options, &mut out)?;
        }
        return Ok(all_decoded);
    }
    let stdin = stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let symbol = line.trim();
        if symbol.is_empty() {
            continue;
        }
        all_decoded &= demangle_line(symbol, &options, &mut out)?;
    }
    Ok(all_decoded)
}
