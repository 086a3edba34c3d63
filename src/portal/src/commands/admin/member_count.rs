use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use clap::Parser;

/// Prints the number of registered players.
#[derive(Parser)]
pub struct MemberCountOpts {}

pub async fn exec(backend: &BackendClient<'_>, _opts: MemberCountOpts) -> PortalResult {
    println!("{}", backend.get_total_member_count().await?.0);
    Ok(())
}
