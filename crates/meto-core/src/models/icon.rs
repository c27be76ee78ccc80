use crate::choice::choice_enum;

choice_enum! {
    /// Symbolic icon reference. The web layer maps each key to a glyph
    /// from the configured icon theme.
    pub enum IconKey("icon") {
        Dashboard => ("dashboard", "Dashboard"),
        Orders => ("orders", "Orders"),
        Products => ("products", "Products"),
        Customers => ("customers", "Customers"),
        Analytics => ("analytics", "Analytics"),
        Settings => ("settings", "Settings"),
        Money => ("money", "Money"),
        Bag => ("bag", "Shopping bag"),
        Smile => ("smile", "Smile"),
        Eye => ("eye", "Views"),
        FileList => ("file_list", "File list"),
        Cart => ("cart", "Cart"),
        User => ("user", "User"),
        Store => ("store", "Store"),
        Box => ("box", "Box"),
        Support => ("support", "Support"),
        BarChart => ("bar_chart", "Bar chart"),
    }
}
