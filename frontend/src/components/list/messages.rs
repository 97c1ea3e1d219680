use common::query::SortKey;

#[derive(Clone)]
pub enum Msg {
    UpdateFilter(String),
    SelectSortKey(SortKey),
}
