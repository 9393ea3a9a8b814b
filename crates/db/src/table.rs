use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Document {
    Table,
    UserId,
    Collection,
    Key,
    Body,
    UpdatedAt,
}
