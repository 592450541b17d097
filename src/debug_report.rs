use aerobatics::{AerobaticSequence, ParseResultVerbose, ScoreTerm};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// One line per maneuver followed by the total.
pub fn print_summary(seq: &AerobaticSequence, color: bool) {
    let palette = ansi::Palette::new(color);

    for (idx, m) in seq.maneuvers().iter().enumerate() {
        println!(
            "{} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.paint(m.kind.to_string(), ansi::BLUE),
            palette.paint(format!("x{}", m.repeat_count), ansi::YELLOW),
            palette.paint(m.difficulty.to_string(), ansi::CYAN),
        );
    }
    println!("{} {}", palette.dim("difficulty:"), palette.bold(palette.paint(format_score(seq.difficulty()), ansi::GREEN)));
}

pub fn print_run(res: &ParseResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("✈  Signature: \"{}\"", res.text.trim_end()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Maneuvers ━━━", ansi::GRAY));
    if details.terms.is_empty() {
        println!("{}", palette.dim("  No maneuvers found"));
        println!("\n{}", palette.paint("Tokens look like:", ansi::YELLOW));
        println!("  • one of L H R T S, then digits, then a grade A-F (e.g. L3A)");
        println!("  • letters are case-sensitive");
        println!("\n{}", palette.dim("  Tip: Set RUST_LOG=aerobatics=debug to trace token extraction"));
    } else {
        for term in &details.terms {
            print_term(term, &palette);
        }
    }

    println!("\n{}", palette.paint("━━━ Score ━━━", ansi::GRAY));
    println!(
        "  Raw: {}  │  Rounded: {}",
        palette.dim(details.raw_total.to_string()),
        palette.bold(palette.paint(format_score(res.sequence.difficulty()), ansi::GREEN)),
    );

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Tokenize: {}  │  Score: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.tokenize), ansi::CYAN),
        palette.dim(format!("{:?}", details.score)),
    );
    println!();
}

fn print_term(term: &ScoreTerm, palette: &ansi::Palette) {
    let bonus = if term.bonus > 1.0 {
        palette.paint(format!("×{} adjacency", term.bonus), ansi::YELLOW)
    } else {
        palette.dim("no bonus")
    };

    println!(
        "  {} {} {} {}",
        palette.paint(format!("[{}]", term.index), ansi::GRAY),
        palette.bold(palette.paint(&term.token, ansi::BLUE)),
        palette.dim("│"),
        palette.paint(format!("span {}..{}", term.span.start, term.span.end), ansi::YELLOW),
    );
    println!(
        "      {} {}  {} {}  {} {}",
        palette.dim("base:"),
        palette.paint(format_score(term.base), ansi::CYAN),
        palette.dim("│"),
        bonus,
        palette.dim("│ score:"),
        palette.paint(format_score(term.score), ansi::GREEN)
    );
}

fn format_score(value: f64) -> String {
    format!("{:.2}", value)
}
