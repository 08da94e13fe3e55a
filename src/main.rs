use chatbot_settings::{telemetry, AppContext};

fn main() -> Result<(), chatbot_settings::Error> {
    telemetry::init_tracing()?;

    let ctx = AppContext::from_env().inspect_err(|err| {
        tracing::error!(error = %err, "startup aborted");
    })?;

    let settings = ctx.settings();
    tracing::info!(
        app_name = %settings.app_name,
        debug = settings.debug,
        active_profile = %settings.active_profile,
        link_preview = settings.link_preview,
        "settings loaded"
    );

    Ok(())
}
