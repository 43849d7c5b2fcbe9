use topic_admin_api::TopicOutcome;

use crate::config::{AdminConfig, CreateArgs};
use crate::error::CliError;

pub async fn run(config_path: &str, args: CreateArgs) -> Result<TopicOutcome, CliError> {
    let config = AdminConfig::load(config_path)?;
    let admin = super::build_admin(config)?;
    let cancel = super::ctrl_c_token();

    let detail = args.detail();
    tracing::info!(
        topic = %args.name,
        partitions = detail.num_partitions,
        replication_factor = detail.replication_factor,
        "creating topic"
    );
    let outcome = admin.create_topic(&cancel, &args.name, Some(&detail)).await;
    admin.close()?;
    Ok(outcome)
}
