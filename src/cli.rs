use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arsenal")]
#[command(about = "Arsenalサイトのアセット索引・静的サイト生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// tracksフォルダを走査してインデックスを作成
    Index {
        /// アセットフォルダ（省略時は設定値）
        #[arg(short, long)]
        assets: Option<PathBuf>,

        /// CSVも出力
        #[arg(long)]
        csv: bool,

        /// ドライラン（書き込まずに行を表示）
        #[arg(long)]
        dry_run: bool,
    },

    /// 静的サイトを生成
    Build {
        /// アセットフォルダ（省略時は設定値）
        #[arg(short, long)]
        assets: Option<PathBuf>,

        /// 出力フォルダ（省略時は設定値）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// サイトタイトル
        #[arg(short, long)]
        title: Option<String>,

        /// アセットURLの接頭辞
        #[arg(long)]
        asset_url_prefix: Option<String>,

        /// 走査せずに asset_index.json を使う
        #[arg(long)]
        from_index: bool,
    },

    /// カタログを検索（ブラウザと同じ絞り込み）
    Search {
        /// 検索語（空なら全件）
        #[arg(default_value = "")]
        query: String,

        /// アルバム一覧JSON（api/albums）
        #[arg(short, long, conflicts_with = "assets")]
        catalog: Option<PathBuf>,

        /// アセットフォルダを直接走査
        #[arg(short, long)]
        assets: Option<PathBuf>,

        /// 走査せずに asset_index.json を使う
        #[arg(long, conflicts_with = "catalog")]
        from_index: bool,

        /// HTMLで出力
        #[arg(long)]
        html: bool,
    },

    /// 設定を表示/編集
    Config {
        /// アセットフォルダを設定
        #[arg(long)]
        set_assets_dir: Option<PathBuf>,

        /// 出力フォルダを設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_default_query() {
        let cli = Cli::parse_from(["arsenal", "search"]);
        match cli.command {
            Commands::Search { query, html, .. } => {
                assert_eq!(query, "");
                assert!(!html);
            }
            _ => panic!("searchとして解析されていない"),
        }
    }

    #[test]
    fn test_parse_index_flags() {
        let cli = Cli::parse_from(["arsenal", "-v", "index", "--csv", "--dry-run", "-a", "site/assets"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Index { assets, csv, dry_run } => {
                assert_eq!(assets, Some(PathBuf::from("site/assets")));
                assert!(csv);
                assert!(dry_run);
            }
            _ => panic!("indexとして解析されていない"),
        }
    }

    #[test]
    fn test_parse_from_index() {
        let cli = Cli::parse_from(["arsenal", "build", "--from-index", "-o", "dist"]);
        match cli.command {
            Commands::Build { from_index, output, .. } => {
                assert!(from_index);
                assert_eq!(output, Some(PathBuf::from("dist")));
            }
            _ => panic!("buildとして解析されていない"),
        }

        let result = Cli::try_parse_from(["arsenal", "search", "x", "-c", "a.json", "--from-index"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_search_catalog_conflicts_with_assets() {
        let result = Cli::try_parse_from(["arsenal", "search", "x", "-c", "a.json", "-a", "assets"]);
        assert!(result.is_err());
    }
}
