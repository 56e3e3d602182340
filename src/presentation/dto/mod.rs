// DTOモジュール
pub mod sync_status;

// バリデーショントレイト
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
