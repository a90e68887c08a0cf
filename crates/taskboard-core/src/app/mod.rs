//! App - アプリケーション層
//!
//! ports とリポジトリを組み合わせ、表示層に向けた操作を提供します。
//!
//! # 主要コンポーネント
//! - **RepositoryBuilder**: リポジトリの構築とワイヤリング
//! - **TaskBoard**: 確認・通知 hook 付きのタスク操作と統計
//! - **ContactInbox**: お問い合わせフォームの受付
//! - **seed**: 初回表示用のデモデータ

pub mod board;
pub mod builder;
pub mod inbox;
pub mod seed;

pub use self::board::{DELETE_PROMPT, DeleteOutcome, TaskBoard, TaskPage};
pub use self::builder::{BuildError, RepositoryBuilder};
pub use self::inbox::ContactInbox;
pub use self::seed::{DEMO_LAST_ID, demo_tasks};
