use serde_json::{Value, json};

/// A movies record with two quarters of creation counts and three directors.
pub fn movies_record(sheet: &str) -> Value {
    json!({
        "sheet_name": sheet,
        "create_time": {"2020Q1": 5, "2020Q2": 3},
        "director": {"top_5": [
            {"director": "Denis Villeneuve", "count": 3},
            {"director": "Bong Joon-ho", "count": 2},
            {"director": "Greta Gerwig", "count": 1}
        ]}
    })
}

/// A complete movies record, every ranked dimension present.
pub fn full_movies_record(sheet: &str) -> Value {
    json!({
        "sheet_name": sheet,
        "create_time": {"2019Q4": 2, "2020Q1": 5},
        "director": {"top_5": [{"director": "Agnès Varda", "count": 2}]},
        "actor": {"top_5": [
            {"actor": "Tilda Swinton", "count": 4},
            {"actor": "Song Kang-ho", "count": 3}
        ]}
    })
}

pub fn books_record(sheet: &str) -> Value {
    json!({
        "sheet_name": sheet,
        "create_time": {"2021Q3": 4},
        "author": {"top_5": [{"author": "Ursula K. Le Guin", "count": 4}]},
        "publisher": {"top_5": [{"publisher": "Tor", "count": 2}]}
    })
}

pub fn games_record(sheet: &str) -> Value {
    json!({
        "sheet_name": sheet,
        "create_time": {"2022-01": 1, "2022-02": 3, "2023-01": 2},
        "genre": {"top_5": [
            {"genre": "RPG", "count": 6},
            {"genre": "Roguelike", "count": 4},
            {"genre": "Puzzle", "count": 3},
            {"genre": "Strategy", "count": 2},
            {"genre": "Racing", "count": 1},
            {"genre": "Sports", "count": 1}
        ]}
    })
}

/// An advanced-analysis document with every section, written with the
/// upstream job's keys.
pub fn advanced_document() -> Value {
    json!({
        "评分趋势": {
            "电影": [
                {"创建年份": 2019, "豆瓣评分": 7.9, "我的评分": 3.0},
                {"创建年份": 2020, "豆瓣评分": 8.2, "我的评分": 4.5}
            ],
            "图书": [{"创建年份": 2021, "豆瓣评分": 8.8, "我的评分": 5.0}],
            "游戏": [{"创建年份": 2022, "豆瓣评分": null, "我的评分": 4.0}]
        },
        "兴趣周期": {
            "电影": {"按月份": {"12": 3, "01": 5, "06": 2}, "按季度": {"Q4": 3, "Q1": 5}},
            "图书": {"按月份": {"03": 1}, "按季度": {"Q1": 1}},
            "游戏": {"按月份": {"07": 4}}
        },
        "消费速度": {
            "电影": {"平均每年消费数量": 48.0, "平均每季度消费数量": 12.0},
            "图书": {"平均每年消费数量": 20.0, "平均每季度消费数量": 5.0},
            "游戏": {"平均每年消费数量": 8.0, "平均每季度消费数量": 2.0}
        }
    })
}

pub fn advanced_without_consumption_speed() -> Value {
    let mut document = advanced_document();
    if let Some(sections) = document.as_object_mut() {
        sections.remove("消费速度");
    }
    document
}

/// A readable movies record whose actor list has an entry without a count.
/// Its creation counts are written as floats, as some exporters do.
pub fn movies_record_with_broken_actor(sheet: &str) -> Value {
    json!({
        "sheet_name": sheet,
        "create_time": {"2020Q1": 5.0, "2020Q2": 3.0},
        "director": {"top_5": [{"director": "Chloé Zhao", "count": 2}]},
        "actor": {"top_5": [{"actor": "Frances McDormand"}]}
    })
}
