use topic_admin_api::TopicOutcome;

use crate::config::{AdminConfig, DeleteArgs};
use crate::error::CliError;

pub async fn run(config_path: &str, args: DeleteArgs) -> Result<TopicOutcome, CliError> {
    let config = AdminConfig::load(config_path)?;
    let admin = super::build_admin(config)?;
    let cancel = super::ctrl_c_token();

    tracing::info!(topic = %args.name, "deleting topic");
    let outcome = admin.delete_topic(&cancel, &args.name).await;
    admin.close()?;
    Ok(outcome)
}
