use mailtemplate::mailtemplate_version;
use mailtemplate::modules::{
    error::TemplateResult, logger, runner, settings::cli::SETTINGS,
};
use mimalloc::MiMalloc;
use std::io::Write;
use tracing::{error, info};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> TemplateResult<()> {
    logger::initialize_logging()?;
    info!("Starting mailtemplate");
    info!("Version:  {}", mailtemplate_version!());

    match runner::run(&SETTINGS) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&output)?;
            stdout.flush()?;
            Ok(())
        }
        Err(e) => {
            error!("Failed to render email: [{:?}] {}", e.code(), e);
            eprintln!("{:?}", e);
            std::process::exit(e.code().exit_status());
        }
    }
}
