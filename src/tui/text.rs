use profpass::Config;

use crate::terminal::{
    DIM, RESET, box_bottom, box_line, box_line_center, box_opt, box_top, format_number,
    print_error,
};

pub const BANNER: &str = r"
                        ___
     ____  _________  / __/___  ____ ___________
    / __ \/ ___/ __ \/ /_/ __ \/ __ `/ ___/ ___/
   / /_/ / /  / /_/ / __/ /_/ / /_/ (__  |__  )
  / .___/_/   \____/_/ / .___/\__,_/____/____/
 /_/                  /_/
";

pub fn print_banner() {
    println!("{DIM}{BANNER}{RESET}");
}

pub fn print_help() {
    box_top("Profpass");
    box_line_center("Profile-driven password wordlist generator");
    box_line("");
    box_line("For authorized audits only: build candidate lists for targets you");
    box_line("have permission to test.");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without a profile. Answers questions about the");
    box_line("     target, then generates the wordlist.");
    box_line("  2) Profile: Pass a JSON profile with -p to skip the questions.");
    box_line("");
    box_line("USAGE:");
    box_line("  profpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Profile:");
    box_opt("  -i, --interactive", "Ask for the profile on the terminal (default)");
    box_opt("  -p, --profile <FILE>", "Read the profile from a JSON document");
    box_line("");
    box_line(" Rules:");
    box_opt("      --min <N>", "Shortest candidate kept (default: 6)");
    box_opt("      --max <N>", "Longest candidate kept (default: 20)");
    box_opt("      --leet <0|1|2>", "Leet substitution level, 0 disables (default: 1)");
    box_opt("      --depth <N>", "2 pairs keywords, 3 adds suffixes to pairs (default: 2)");
    box_opt("      --special <CHARS>", "Override special characters (default: !@#$%?)");
    box_opt("      --no-special", "Do not add special characters");
    box_opt("      --no-case", "Skip upper/lower case patterns");
    box_opt("      --no-reverse", "Skip reversed keywords");
    box_opt("      --no-common", "Skip the built-in common numbers");
    box_opt("      --bruteforce", "Fold case swaps into leet expansion and reverse every variant");
    box_opt("      --initials", "Add the target's initials as keywords");
    box_line("");
    box_line(" Output:");
    box_opt("  -n, --number <N>", "Stop after N candidates");
    box_opt("      --no-limit", "Remove the candidate cap");
    box_opt("  -o, --output [FILE]", "Write to file (default: profpass.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -e, --estimate", "Print the size estimate and exit");
    box_opt("  -q, --quiet", "Suppress everything except candidates");
    box_line("");
    box_line(" Settings:");
    box_opt("  -c, --config <FILE>", "Settings document (default: ~/.config/profpass/config.json)");
    box_opt("      --save-config", "Save the effective settings to the config file and exit");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  profpass                        Questionnaire, print to terminal");
    box_line("  profpass -p alice.json -o .     Profile to ./profpass.txt");
    box_line("  profpass -p alice.json -e       How big would it be?");
    box_line("  profpass -p a.json --depth 3    Pairs with suffixes and specials");
    box_line("  profpass --min 8 --save-config  Keep min length 8 for future runs");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_estimate(estimate: u128, config: &Config) {
    box_top("Estimate");
    box_line(&format!("Up to {} candidates before length filtering", format_number(estimate)));
    box_line(&format!(
        "Length {}..={} • Depth {} • Leet {}",
        config.min_length, config.max_length, config.max_combination_depth, config.leet_level
    ));
    match config.cap() {
        Some(cap) => box_line(&format!("Capped at {}", format_number(cap as u128))),
        None => box_line("No cap"),
    }
    box_bottom();
}

pub fn print_file_exists(file_name: &str) {
    print_error(&format!("File {file_name} already exists."));
    println!();
    box_top("");
    box_line_center("a) append | o) overwrite");
    box_bottom();
}
