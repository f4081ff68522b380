use iced_vitrine::app::{self, Flags};

const HELP: &str = "\
iced_vitrine - accessible local-products storefront

USAGE:
  iced_vitrine [OPTIONS]

OPTIONS:
  --lang <LANG>        Locale override in BCP-47 form (e.g. pt-BR)
  --i18n-dir <DIR>     Extra directory searched for Fluent .ftl files
  --config-dir <DIR>   Override for the directory holding settings.toml
  --data-dir <DIR>     Override for the directory holding the cart snapshot
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        data_dir: args.opt_value_from_str("--data-dir").unwrap(),
    };

    app::run(flags)
}
