use super::AppContext;
use anyhow::Result;
use folio_core::tunnel::TunnelStatusSource;
use folio_infrastructure::HttpTunnelStatusSource;

pub async fn status(ctx: &AppContext, tunnel_id: &str) -> Result<()> {
    let source = HttpTunnelStatusSource::from_config(&ctx.config.tunnel)?;
    let status = source.get_status(tunnel_id).await?;
    println!("{}", crate::render::tunnel_status(&status, &ctx.palette));
    Ok(())
}
