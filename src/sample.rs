use crate::catalog::{BookRecord, Catalog};
use crate::cli::SampleArgs;
use crate::output;

/// Built-in demo snapshot: the classic shelves served when live data is
/// unavailable. Useful for trying the commands without a producer, and piped
/// back in as regular input.
#[must_use]
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::default();

    catalog.insert(
        "小说",
        vec![
            book("百年孤独", 9.3, 892_345, "[哥伦比亚] 加西亚·马尔克斯 / 范晔 / 南海出版公司"),
            book("三体", 9.2, 756_234, "刘慈欣 / 重庆出版社"),
            book("活着", 9.1, 634_567, "余华 / 作家出版社"),
            book("白夜行", 9.0, 545_678, "[日] 东野圭吾 / 刘姿君 / 南海出版公司"),
            book("红楼梦", 9.6, 423_456, "曹雪芹 / 人民文学出版社"),
        ],
    );
    catalog.insert(
        "历史",
        vec![
            book("人类简史", 9.1, 567_890, "[以色列] 尤瓦尔·赫拉利 / 林俊宏 / 中信出版社"),
            book("明朝那些事儿", 9.0, 456_789, "当年明月 / 中国友谊出版公司"),
            book("万历十五年", 8.9, 345_678, "黄仁宇 / 生活·读书·新知三联书店"),
            book("全球通史", 9.0, 289_456, "[美] 斯塔夫里阿诺斯 / 吴象婴 / 北京大学出版社"),
            book("史记", 9.5, 234_567, "司马迁 / 中华书局"),
        ],
    );
    catalog.insert(
        "科技",
        vec![
            book("时间简史", 8.8, 456_789, "[英] 史蒂芬·霍金 / 许明贤 / 湖南科学技术出版社"),
            book("从一到无穷大", 9.1, 345_678, "[美] 乔治·伽莫夫 / 暴永宁 / 科学出版社"),
            book("上帝掷骰子吗", 8.9, 234_567, "曹天元 / 北京联合出版公司"),
            book("失控", 8.7, 189_456, "[美] 凯文·凯利 / 东西文库 / 新星出版社"),
            book("必然", 8.5, 123_456, "[美] 凯文·凯利 / 周峰 / 电子工业出版社"),
        ],
    );
    catalog.insert(
        "经济",
        vec![
            book("经济学原理", 9.0, 234_567, "[美] 曼昆 / 梁小民 / 北京大学出版社"),
            book("资本论", 9.2, 189_456, "马克思 / 中共中央编译局 / 人民出版社"),
            book("国富论", 9.0, 156_789, "[英] 亚当·斯密 / 谢祖钧 / 中央编译出版社"),
            book("思考，快与慢", 8.8, 234_567, "[美] 丹尼尔·卡尼曼 / 胡晓姣 / 中信出版社"),
            book("贫穷的本质", 8.6, 123_456, "[美] 阿比吉特·班纳吉 / 景芳 / 中信出版社"),
        ],
    );
    catalog.insert(
        "文学",
        vec![
            book("围城", 9.0, 567_890, "钱钟书 / 人民文学出版社"),
            book("平凡的世界", 9.0, 456_789, "路遥 / 北京十月文艺出版社"),
            book("追风筝的人", 8.9, 389_456, "[美] 卡勒德·胡赛尼 / 李继宏 / 上海人民出版社"),
            book("麦田里的守望者", 8.7, 278_901, "[美] J. D. 塞林格 / 孙仲旭 / 译林出版社"),
            book("挪威的森林", 8.5, 234_567, "[日] 村上春树 / 林少华 / 上海译文出版社"),
        ],
    );
    catalog.insert(
        "哲学",
        vec![
            book("苏菲的世界", 8.9, 345_678, "[挪威] 乔斯坦·贾德 / 萧宝森 / 作家出版社"),
            book("沉思录", 8.8, 234_567, "[古罗马] 马可·奥勒留 / 何怀宏 / 中央编译出版社"),
            book("存在与时间", 9.0, 123_456, "[德] 马丁·海德格尔 / 陈嘉映 / 生活·读书·新知三联书店"),
            book("理想国", 8.7, 189_456, "[古希腊] 柏拉图 / 郭斌和 / 商务印书馆"),
            book("查拉图斯特拉如是说", 8.9, 156_789, "[德] 尼采 / 钱春绮 / 生活·读书·新知三联书店"),
        ],
    );
    catalog.insert(
        "心理学",
        vec![
            book("乌合之众", 8.6, 345_678, "[法] 古斯塔夫·勒庞 / 冯克利 / 中央编译出版社"),
            book("自卑与超越", 8.8, 234_567, "[奥] 阿尔弗雷德·阿德勒 / 曹晚红 / 作家出版社"),
            book("梦的解析", 8.7, 189_456, "[奥] 弗洛伊德 / 孙名之 / 商务印书馆"),
            book("影响力", 8.9, 278_901, "[美] 罗伯特·西奥迪尼 / 闾佳 / 万卷出版公司"),
            book("社会心理学", 9.0, 123_456, "[美] 戴维·迈尔斯 / 侯玉波 / 人民邮电出版社"),
        ],
    );
    catalog.insert(
        "编程",
        vec![
            book("代码大全", 9.3, 123_456, "[美] 史蒂夫·迈克康奈尔 / 金戈 / 电子工业出版社"),
            book("计算机程序的构造和解释", 9.5, 89_456, "[美] Harold Abelson / 裘宗燕 / 机械工业出版社"),
            book("Python编程：从入门到实践", 9.1, 156_789, "[美] 埃里克·马瑟斯 / 袁国忠 / 人民邮电出版社"),
            book("深度学习", 8.8, 67_890, "[美] Ian Goodfellow / 赵申剑 / 人民邮电出版社"),
            book("JavaScript高级程序设计", 9.2, 134_567, "[美] 马特·弗里斯比 / 李松峰 / 人民邮电出版社"),
        ],
    );

    catalog
}

fn book(title: &str, rating: f64, rating_count: u64, info: &str) -> BookRecord {
    BookRecord {
        title: title.to_owned(),
        rating,
        rating_count,
        info: info.to_owned(),
        cover: None,
        link: None,
    }
}

pub fn run(args: SampleArgs) -> anyhow::Result<()> {
    output::emit(&sample_catalog(), args.format)
}
