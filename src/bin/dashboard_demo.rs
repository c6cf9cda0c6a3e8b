//! 仪表盘演示程序
//! 依次执行示例数据上的 CRUD 操作并输出模拟的 API 响应

use api_dashboard::infrastructure::{config, logger::Logger};
use api_dashboard::{CreateUserRequest, Status, Summary, UpdateUserRequest, UserHandler};
use tracing::{error, info};

fn main() {
    let config = match config::load_config(&["dashboard.toml", "./config/dashboard.toml"]) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("配置加载失败: {}", e);
            std::process::exit(1);
        }
    };
    Logger::init_with_filter(&config.logging.level);

    info!("🚀 启动 API 仪表盘演示");
    let mut handler = UserHandler::from_config(&config);
    print_summary(&handler.summary());

    let base = config.api.base_path.clone();
    println!("{}\n", handler.simulate_api_call("GET", &base));

    let (alice, text) = handler.create(CreateUserRequest::new(
        "Alice",
        "alice@example.com",
        Status::Active,
    ));
    println!("{}\n", text);

    let first = handler.formatter().item_path("1");
    println!("{}\n", handler.simulate_api_call("GET", &first));

    match handler.update(
        alice.id(),
        UpdateUserRequest::default().status(Status::Pending),
    ) {
        Ok((_, text)) => println!("{}\n", text),
        Err(e) => error!("更新失败: {}", e),
    }

    if handler.read("missing").is_err() {
        println!("{}\n", handler.last_response());
    }

    let (_, text) = handler.delete("2");
    println!("{}\n", text);

    print_summary(&handler.summary());
    info!("✅ 演示完成");
}

fn print_summary(summary: &Summary) {
    println!(
        "📊 总数: {}  活跃: {}  待定: {}  停用: {}\n",
        summary.total, summary.active, summary.pending, summary.inactive
    );
}
