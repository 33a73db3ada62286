use super::game::{Answer, Category, Question, QuestionId};

fn seed_question(id: i64, text: &str, category: Category, answers: &[(&str, u32)]) -> Question {
    Question {
        id: QuestionId::Int(id),
        question: text.to_string(),
        category,
        answers: answers
            .iter()
            .map(|(text, points)| Answer::new(text, *points))
            .collect(),
    }
}

/// The catalog written on first launch.
pub fn default_catalog() -> Vec<Question> {
    vec![
        seed_question(
            1,
            "أشياء تستخدمها في المطبخ",
            Category::HouseholdItems,
            &[
                ("سكين", 45),
                ("ملعقة", 38),
                ("طنجرة", 32),
                ("كوب", 28),
                ("صحن", 25),
                ("فرن", 18),
                ("خلاط", 12),
                ("مقلاة", 8),
            ],
        ),
        seed_question(
            2,
            "دول عربية مشهورة",
            Category::Geography,
            &[
                ("السعودية", 42),
                ("مصر", 38),
                ("الإمارات", 35),
                ("الأردن", 28),
                ("المغرب", 22),
                ("العراق", 18),
                ("سوريا", 15),
                ("لبنان", 12),
            ],
        ),
        seed_question(
            3,
            "رياضات مشهورة",
            Category::Sports,
            &[
                ("كرة القدم", 48),
                ("كرة السلة", 35),
                ("السباحة", 28),
                ("التنس", 22),
                ("كرة اليد", 18),
                ("الجري", 15),
                ("كرة الطائرة", 12),
                ("الملاكمة", 8),
            ],
        ),
        seed_question(
            4,
            "أطعمة شعبية في البلدان العربية",
            Category::FoodAndDrink,
            &[
                ("الكبسة", 42),
                ("المندي", 38),
                ("المنسف", 32),
                ("الكنافة", 28),
                ("الفتوش", 25),
                ("الحمص", 20),
                ("الفلافل", 15),
                ("البقلاوة", 10),
            ],
        ),
        seed_question(
            5,
            "حيوانات أليفة",
            Category::Animals,
            &[
                ("القطة", 45),
                ("الكلب", 40),
                ("العصفور", 28),
                ("السمك", 22),
                ("الأرنب", 18),
                ("الهامستر", 12),
                ("السلحفاة", 8),
                ("الببغاء", 5),
            ],
        ),
        seed_question(
            6,
            "أفلام عربية مشهورة",
            Category::MoviesAndSeries,
            &[
                ("الرسالة", 40),
                ("عمر المختار", 35),
                ("وداعاً بونابرت", 30),
                ("بحب السيما", 25),
                ("المصير", 20),
                ("هي فوضى", 15),
                ("عاصل اسود", 10),
                ("ولاد رزق", 8),
            ],
        ),
        seed_question(
            7,
            "وسائل النقل",
            Category::GeneralKnowledge,
            &[
                ("السيارة", 50),
                ("الطائرة", 38),
                ("الحافلة", 30),
                ("القطار", 25),
                ("الدراجة", 18),
                ("الباخرة", 12),
                ("الدراجة النارية", 8),
                ("المترو", 5),
            ],
        ),
        seed_question(
            8,
            "تطبيقات الهاتف المحمول",
            Category::Technology,
            &[
                ("واتساب", 48),
                ("انستغرام", 40),
                ("فيسبوك", 35),
                ("يوتيوب", 30),
                ("تويتر", 22),
                ("سناب شات", 15),
                ("تيك توك", 12),
                ("تليجرام", 8),
            ],
        ),
        seed_question(
            9,
            "مهن وظائف مختلفة",
            Category::JobsAndProfessions,
            &[
                ("طبيب", 45),
                ("مدرس", 38),
                ("مهندس", 32),
                ("محامي", 28),
                ("ممرض", 22),
                ("شرطي", 18),
                ("طباخ", 12),
                ("سائق", 8),
            ],
        ),
        seed_question(
            10,
            "مدن سياحية عربية",
            Category::PlacesAndCities,
            &[
                ("دبي", 42),
                ("القاهرة", 38),
                ("بيروت", 30),
                ("الدوحة", 25),
                ("مراكش", 20),
                ("دمشق", 15),
                ("تونس", 12),
                ("الكويت", 8),
            ],
        ),
        seed_question(
            11,
            "أنواع الموسيقى",
            Category::Entertainment,
            &[
                ("البوب", 40),
                ("الكلاسيكية", 35),
                ("الراب", 28),
                ("الجاز", 22),
                ("الروك", 18),
                ("الطرب", 15),
                ("الإلكترونية", 10),
                ("الريغي", 5),
            ],
        ),
        seed_question(
            12,
            "مناسبات اجتماعية",
            Category::CustomsAndTraditions,
            &[
                ("الزواج", 45),
                ("العيد", 38),
                ("التخرج", 30),
                ("عيد الميلاد", 25),
                ("الخطوبة", 20),
                ("رمضان", 15),
                ("النجاح", 10),
                ("التقاعد", 8),
            ],
        ),
        seed_question(
            13,
            "مواد دراسية",
            Category::Education,
            &[
                ("الرياضيات", 40),
                ("العربية", 35),
                ("الإنجليزية", 30),
                ("العلوم", 25),
                ("التاريخ", 20),
                ("الجغرافيا", 15),
                ("الفيزياء", 12),
                ("الكيمياء", 8),
            ],
        ),
        seed_question(
            14,
            "شخصيات تاريخية عربية",
            Category::History,
            &[
                ("صلاح الدين", 42),
                ("هارون الرشيد", 35),
                ("عمر بن الخطاب", 30),
                ("أبو بكر الصديق", 25),
                ("خالد بن الوليد", 20),
                ("عمرو بن العاص", 15),
                ("المأمون", 10),
                ("المتنبي", 8),
            ],
        ),
        seed_question(
            15,
            "ألوان أساسية وثانوية",
            Category::GeneralKnowledge,
            &[
                ("أحمر", 45),
                ("أزرق", 40),
                ("أصفر", 35),
                ("أخضر", 28),
                ("أسود", 22),
                ("أبيض", 18),
                ("برتقالي", 12),
                ("بنفسجي", 8),
            ],
        ),
    ]
}
