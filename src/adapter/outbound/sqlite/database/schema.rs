diesel::table! {
    expense (id) {
        id -> Integer,
        value -> Double,
        date -> Text,
        category -> Text,
        description -> Text,
        observation -> Text,
    }
}
