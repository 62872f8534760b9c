use arsenal_common::{group_rows, render_catalog_html, Catalog};
use arsenal_site::{cli, config, error, export, scanner};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Index { assets, csv, dry_run } => {
            println!("🎵 arsenal - インデックス作成\n");

            let assets_dir = assets.unwrap_or_else(|| config.assets_dir());
            println!("[1/2] tracksフォルダを走査中...");
            let rows = scanner::scan_tracks(&assets_dir)?;

            if rows.is_empty() {
                println!("tracksにコンテンツが見つかりません。インデックスは更新しません");
                return Ok(());
            }
            println!("✔ {}件を検出\n", rows.len());

            if dry_run {
                for row in &rows {
                    println!("{}", serde_json::to_string(row)?);
                }
                println!("\n{}件", rows.len());
                return Ok(());
            }

            println!("[2/2] インデックスを保存中...");
            let index_path = assets_dir.join(export::INDEX_FILE_NAME);
            export::write_index_json(&rows, &index_path)?;
            println!("✔ {} ({}件)", index_path.display(), rows.len());

            if csv {
                let csv_path = assets_dir.join(export::INDEX_CSV_NAME);
                export::csv::write_csv(&rows, &csv_path)?;
                println!("✔ {}", csv_path.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Build { assets, output, title, asset_url_prefix, from_index } => {
            println!("🚀 arsenal - サイト生成\n");

            let options = export::BuildOptions {
                assets_dir: assets.unwrap_or_else(|| config.assets_dir()),
                output_dir: output.unwrap_or_else(|| config.output_dir.clone()),
                asset_url_prefix: asset_url_prefix.unwrap_or_else(|| config.asset_url_prefix.clone()),
                site_title: title.unwrap_or_else(|| config.site_title.clone()),
            };

            if from_index {
                println!("[1/2] インデックスを読み込み中...");
            } else {
                println!("[1/2] tracksフォルダを走査中...");
            }
            let rows = export::load_rows(&options.assets_dir, from_index)?;
            println!("✔ {}件を検出\n", rows.len());

            println!("[2/2] サイトを生成中...");
            let report = export::build_site(&rows, &options)?;

            println!(
                "\n✅ 完了: {}アルバム / {}ページ → {}",
                report.albums,
                report.pages,
                options.output_dir.display()
            );
        }

        Commands::Search { query, catalog, assets, from_index, html } => {
            let catalog = match catalog {
                Some(path) => Catalog::from_file(&path)?,
                None => {
                    let assets_dir = assets.unwrap_or_else(|| config.assets_dir());
                    let rows = export::load_rows(&assets_dir, from_index)?;
                    Catalog::new(group_rows(&rows, &config.asset_url_prefix))
                }
            };
            tracing::debug!(albums = catalog.albums().len(), query = %query, "searching catalog");

            let view = catalog.view(&query);

            if view.is_empty() {
                tracing::info!(query = %query, "no matching items");
            }

            if html {
                println!("{}", render_catalog_html(&view));
            } else {
                for group in &view.groups {
                    println!("{}", group.title);
                    for item in &group.items {
                        println!("  - {} ({})  {}", item.title, item.kind, item.href());
                    }
                }
            }
            println!("{}", view.count_label());
        }

        Commands::Config { set_assets_dir, set_output_dir, show } => {
            let mut config = config;

            if let Some(dir) = set_assets_dir {
                config.set_assets_dir(dir)?;
                println!("✔ アセットフォルダを設定しました");
            }

            if let Some(dir) = set_output_dir {
                config.set_output_dir(dir)?;
                println!("✔ 出力フォルダを設定しました");
            }

            if show {
                println!("設定:");
                println!("  アセットフォルダ: {}", config.assets_dir().display());
                println!("  出力フォルダ: {}", config.output_dir.display());
                println!("  アセットURL: {}", config.asset_url_prefix);
                println!("  サイトタイトル: {}", config.site_title);
            }
        }
    }

    Ok(())
}
