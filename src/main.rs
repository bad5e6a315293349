//! DigitalHub 电商演示服务器入口

use digitalhub::infrastructure::logger::Logger;
use digitalhub::{build_app, ServerConfig};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, Level};

#[tokio::main]
async fn main() {
    // 初始化日志
    Logger::init(Level::INFO);

    let config = ServerConfig::from_env();
    let addr = config.listen_addr();

    info!("启动 DigitalHub 电商演示服务器...");

    let app = build_app(&config);

    // 绑定失败（例如端口被占用）是致命错误，记录后退出
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("无法绑定到 {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("🚀 服务器运行在 http://{}", addr);
    info!("📖 可用的入口:");
    info!("   首页:     http://{}/index.html", addr);
    info!("   商品列表: http://{}/products.html", addr);
    info!("   API:      http://{}/api/products", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("服务器运行失败: {}", e);
        std::process::exit(1);
    }

    info!("服务器已关闭");
}

/// 等待 Ctrl+C 或 SIGTERM，触发优雅关闭
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("监听 Ctrl+C 信号失败: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("监听 SIGTERM 信号失败: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到关闭信号，正在优雅关闭...");
}
