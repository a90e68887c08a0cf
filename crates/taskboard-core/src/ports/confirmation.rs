//! Confirmation port - 破壊的操作の前に利用者へ確認する
//!
//! 確認ダイアログは表示層の関心事なので、リポジトリではなく
//! app 層（TaskBoard）がこの hook を呼びます。

/// Confirmation は yes/no の確認を返す
pub trait Confirmation: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// 常に承認する（非対話環境・テスト用）
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirmation for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
