//! 接口地址配置
//!
//! 默认指向比赛环境的后端，构建时可通过 `KOSMOS_API_URL` 环境变量覆盖。

pub const API_BASE_URL: &str = match option_env!("KOSMOS_API_URL") {
    Some(url) => url,
    None => "http://jjxhzny-m2.wsr.ru/api-kosmos",
};
