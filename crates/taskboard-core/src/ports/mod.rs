//! Ports - 抽象化レイヤー
//!
//! リポジトリと app 層が依存する capability を trait として定義します。
//! テストでは決定的な実装（FixedClock, SequentialIdGenerator）に差し替えます。

pub mod clock;
pub mod confirmation;
pub mod id_generator;
pub mod notifier;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::confirmation::{AlwaysConfirm, Confirmation};
pub use self::id_generator::{IdGenerator, SequentialIdGenerator, UlidGenerator};
pub use self::notifier::{LogNotifier, NoopNotifier, Notice, Notifier};
