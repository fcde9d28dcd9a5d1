//! Organizational requirements (Government Decree No. 1119, items 13-17) and the
//! base set of technical measures (FSTEC Order No. 21) per security level.

use super::domain::{Level, Measure};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("security level {0} is outside the supported range 1..=4")]
    LevelOutOfRange(u8),
}

const SECTION_IAF: &str = "Идентификация и аутентификация субъектов доступа и объектов доступа";
const SECTION_UPD: &str = "Управление доступом субъектов доступа к объектам доступа";
const SECTION_OPS: &str = "Ограничение программной среды";
const SECTION_ZNI: &str = "Защита машинных носителей персональных данных";
const SECTION_RSB: &str = "Регистрация событий безопасности";
const SECTION_AVZ: &str = "Антивирусная защита";
const SECTION_SOV: &str = "Обнаружение вторжений";
const SECTION_ANZ: &str = "Контроль (анализ) защищенности персональных данных";
const SECTION_OCL: &str = "Обеспечение целостности информационной системы и персональных данных";
const SECTION_ZSV: &str = "Защита среды виртуализации";
const SECTION_ZTS: &str = "Защита технических средств";
const SECTION_ZIS: &str = "Защита информационной системы, ее средств, систем связи и передачи данных";
const SECTION_INC: &str = "Выявление инцидентов и реагирование на них";
const SECTION_UKF: &str = "Управление конфигурацией информационной системы и системы защиты персональных данных";

const PREMISES_REGIME: &str = "Организация режима обеспечения безопасности помещений, в которых размещена информационная система, препятствующего возможности неконтролируемого проникновения или пребывания в этих помещениях лиц, не имеющих права доступа в эти помещения";
const MEDIA_SAFEKEEPING: &str = "Обеспечение сохранности носителей персональных данных";
const ACCESS_LIST: &str = "Утверждение руководителем оператора документа, определяющего перечень лиц, доступ которых к персональным данным, обрабатываемым в информационной системе, необходим для выполнения ими служебных (трудовых) обязанностей";
const CERTIFIED_TOOLS: &str = "Использование средств защиты информации, прошедших процедуру оценки соответствия требованиям законодательства Российской Федерации в области обеспечения безопасности информации";
const RESPONSIBLE_OFFICER: &str = "Назначение должностного лица (работника), ответственного за обеспечение безопасности персональных данных в информационной системе";
const JOURNAL_ACCESS: &str = "Обеспечение доступа к содержанию электронного журнала сообщений исключительно для должностных лиц (работников) оператора или уполномоченного лица, которым сведения, содержащиеся в указанном журнале, необходимы для выполнения служебных (трудовых) обязанностей";
const AUTOMATIC_AUDIT: &str = "Автоматическая регистрация в электронном журнале безопасности изменения полномочий сотрудника оператора по доступу к персональным данным, содержащимся в информационной системе";
const SECURITY_UNIT: &str = "Создание структурного подразделения, ответственного за обеспечение безопасности персональных данных в информационной системе, либо возложение на одно из структурных подразделений функций по обеспечению такой безопасности";
const PERIODIC_CONTROL: &str = "Контроль за выполнением требований к защите персональных данных, организуемый и проводимый оператором самостоятельно или с привлечением лицензиата ФСТЭК России не реже 1 раза в 3 года";

const LEVEL_1_REQUIREMENTS: &[&str] = &[
    PREMISES_REGIME,
    MEDIA_SAFEKEEPING,
    ACCESS_LIST,
    CERTIFIED_TOOLS,
    RESPONSIBLE_OFFICER,
    JOURNAL_ACCESS,
    AUTOMATIC_AUDIT,
    SECURITY_UNIT,
    PERIODIC_CONTROL,
];

const LEVEL_2_REQUIREMENTS: &[&str] = &[
    PREMISES_REGIME,
    MEDIA_SAFEKEEPING,
    ACCESS_LIST,
    CERTIFIED_TOOLS,
    RESPONSIBLE_OFFICER,
    JOURNAL_ACCESS,
    PERIODIC_CONTROL,
];

const LEVEL_3_REQUIREMENTS: &[&str] = &[
    PREMISES_REGIME,
    MEDIA_SAFEKEEPING,
    ACCESS_LIST,
    CERTIFIED_TOOLS,
    RESPONSIBLE_OFFICER,
    PERIODIC_CONTROL,
];

const LEVEL_4_REQUIREMENTS: &[&str] = &[
    PREMISES_REGIME,
    MEDIA_SAFEKEEPING,
    ACCESS_LIST,
    CERTIFIED_TOOLS,
    PERIODIC_CONTROL,
];

/// Row of the base measure table. `marks` follows the table columns:
/// level 4, level 3, level 2, level 1.
struct MeasureRow {
    code: &'static str,
    section: &'static str,
    description: &'static str,
    marks: [bool; 4],
}

impl MeasureRow {
    fn required_at(&self, level: Level) -> bool {
        let column = match level {
            Level::L4 => 0,
            Level::L3 => 1,
            Level::L2 => 2,
            Level::L1 => 3,
        };
        self.marks[column]
    }

    fn to_measure(&self) -> Measure {
        Measure {
            code: self.code.to_string(),
            section: self.section.to_string(),
            description: self.description.to_string(),
        }
    }
}

const ALL: [bool; 4] = [true, true, true, true];
const FROM_3: [bool; 4] = [false, true, true, true];
const FROM_2: [bool; 4] = [false, false, true, true];
const ONLY_1: [bool; 4] = [false, false, false, true];

const MEASURE_TABLE: &[MeasureRow] = &[
    MeasureRow {
        code: "ИАФ.1",
        section: SECTION_IAF,
        description: "Идентификация и аутентификация пользователей, являющихся работниками оператора",
        marks: ALL,
    },
    MeasureRow {
        code: "ИАФ.2",
        section: SECTION_IAF,
        description: "Идентификация и аутентификация устройств, в том числе стационарных, мобильных и портативных",
        marks: FROM_3,
    },
    MeasureRow {
        code: "ИАФ.3",
        section: SECTION_IAF,
        description: "Управление идентификаторами, в том числе создание, присвоение, уничтожение идентификаторов",
        marks: ALL,
    },
    MeasureRow {
        code: "ИАФ.4",
        section: SECTION_IAF,
        description: "Управление средствами аутентификации, в том числе хранение, выдача, инициализация, блокирование средств аутентификации",
        marks: ALL,
    },
    MeasureRow {
        code: "ИАФ.5",
        section: SECTION_IAF,
        description: "Защита обратной связи при вводе аутентификационной информации",
        marks: ALL,
    },
    MeasureRow {
        code: "ИАФ.6",
        section: SECTION_IAF,
        description: "Идентификация и аутентификация пользователей, не являющихся работниками оператора (внешних пользователей)",
        marks: ALL,
    },
    MeasureRow {
        code: "УПД.1",
        section: SECTION_UPD,
        description: "Управление (заведение, активация, блокирование и уничтожение) учетными записями пользователей, в том числе внешних пользователей",
        marks: ALL,
    },
    MeasureRow {
        code: "УПД.2",
        section: SECTION_UPD,
        description: "Реализация необходимых методов (дискреционный, мандатный, ролевой или иной метод), типов и правил разграничения доступа",
        marks: ALL,
    },
    MeasureRow {
        code: "УПД.3",
        section: SECTION_UPD,
        description: "Управление (фильтрация, маршрутизация, контроль соединений) информационными потоками между устройствами и сегментами информационной системы",
        marks: ALL,
    },
    MeasureRow {
        code: "УПД.4",
        section: SECTION_UPD,
        description: "Разделение полномочий (ролей) пользователей, администраторов и лиц, обеспечивающих функционирование информационной системы",
        marks: ALL,
    },
    MeasureRow {
        code: "УПД.5",
        section: SECTION_UPD,
        description: "Назначение минимально необходимых прав и привилегий пользователям, администраторам и лицам, обеспечивающим функционирование информационной системы",
        marks: ALL,
    },
    MeasureRow {
        code: "УПД.6",
        section: SECTION_UPD,
        description: "Ограничение неуспешных попыток входа в информационную систему (доступа к информационной системе)",
        marks: ALL,
    },
    MeasureRow {
        code: "УПД.10",
        section: SECTION_UPD,
        description: "Блокирование сеанса доступа в информационную систему после установленного времени бездействия (неактивности) пользователя или по его запросу",
        marks: FROM_3,
    },
    MeasureRow {
        code: "УПД.11",
        section: SECTION_UPD,
        description: "Разрешение (запрет) действий пользователей, разрешенных до идентификации и аутентификации",
        marks: FROM_3,
    },
    MeasureRow {
        code: "УПД.13",
        section: SECTION_UPD,
        description: "Реализация защищенного удаленного доступа субъектов доступа к объектам доступа через внешние информационно-телекоммуникационные сети",
        marks: ALL,
    },
    MeasureRow {
        code: "УПД.14",
        section: SECTION_UPD,
        description: "Регламентация и контроль использования в информационной системе технологий беспроводного доступа",
        marks: ALL,
    },
    MeasureRow {
        code: "УПД.15",
        section: SECTION_UPD,
        description: "Регламентация и контроль использования в информационной системе мобильных технических средств",
        marks: ALL,
    },
    MeasureRow {
        code: "УПД.16",
        section: SECTION_UPD,
        description: "Управление взаимодействием с информационными системами сторонних организаций (внешние информационные системы)",
        marks: ALL,
    },
    MeasureRow {
        code: "УПД.17",
        section: SECTION_UPD,
        description: "Обеспечение доверенной загрузки средств вычислительной техники",
        marks: FROM_2,
    },
    MeasureRow {
        code: "ОПС.2",
        section: SECTION_OPS,
        description: "Управление установкой (инсталляцией) компонентов программного обеспечения, в том числе определение компонентов, подлежащих установке",
        marks: FROM_2,
    },
    MeasureRow {
        code: "ЗНИ.1",
        section: SECTION_ZNI,
        description: "Учет машинных носителей персональных данных",
        marks: FROM_3,
    },
    MeasureRow {
        code: "ЗНИ.2",
        section: SECTION_ZNI,
        description: "Управление доступом к машинным носителям персональных данных",
        marks: FROM_3,
    },
    MeasureRow {
        code: "ЗНИ.8",
        section: SECTION_ZNI,
        description: "Уничтожение (стирание) или обезличивание персональных данных на машинных носителях при их передаче между пользователями, в сторонние организации для ремонта или утилизации",
        marks: FROM_3,
    },
    MeasureRow {
        code: "РСБ.1",
        section: SECTION_RSB,
        description: "Определение событий безопасности, подлежащих регистрации, и сроков их хранения",
        marks: ALL,
    },
    MeasureRow {
        code: "РСБ.2",
        section: SECTION_RSB,
        description: "Определение состава и содержания информации о событиях безопасности, подлежащих регистрации",
        marks: ALL,
    },
    MeasureRow {
        code: "РСБ.3",
        section: SECTION_RSB,
        description: "Сбор, запись и хранение информации о событиях безопасности в течение установленного времени хранения",
        marks: ALL,
    },
    MeasureRow {
        code: "РСБ.5",
        section: SECTION_RSB,
        description: "Мониторинг (просмотр, анализ) результатов регистрации событий безопасности и реагирование на них",
        marks: FROM_3,
    },
    MeasureRow {
        code: "РСБ.7",
        section: SECTION_RSB,
        description: "Защита информации о событиях безопасности",
        marks: ALL,
    },
    MeasureRow {
        code: "АВЗ.1",
        section: SECTION_AVZ,
        description: "Реализация антивирусной защиты",
        marks: ALL,
    },
    MeasureRow {
        code: "АВЗ.2",
        section: SECTION_AVZ,
        description: "Обновление базы данных признаков вредоносных компьютерных программ (вирусов)",
        marks: ALL,
    },
    MeasureRow {
        code: "СОВ.1",
        section: SECTION_SOV,
        description: "Обнаружение вторжений",
        marks: FROM_2,
    },
    MeasureRow {
        code: "СОВ.2",
        section: SECTION_SOV,
        description: "Обновление базы решающих правил",
        marks: FROM_2,
    },
    MeasureRow {
        code: "АНЗ.1",
        section: SECTION_ANZ,
        description: "Выявление, анализ уязвимостей информационной системы и оперативное устранение вновь выявленных уязвимостей",
        marks: FROM_3,
    },
    MeasureRow {
        code: "АНЗ.2",
        section: SECTION_ANZ,
        description: "Контроль установки обновлений программного обеспечения, включая обновление программного обеспечения средств защиты информации",
        marks: ALL,
    },
    MeasureRow {
        code: "АНЗ.3",
        section: SECTION_ANZ,
        description: "Контроль работоспособности, параметров настройки и правильности функционирования программного обеспечения и средств защиты информации",
        marks: FROM_3,
    },
    MeasureRow {
        code: "АНЗ.4",
        section: SECTION_ANZ,
        description: "Контроль состава технических средств, программного обеспечения и средств защиты информации",
        marks: FROM_3,
    },
    MeasureRow {
        code: "ОЦЛ.1",
        section: SECTION_OCL,
        description: "Контроль целостности программного обеспечения, включая программное обеспечение средств защиты информации",
        marks: FROM_2,
    },
    MeasureRow {
        code: "ОЦЛ.4",
        section: SECTION_OCL,
        description: "Обнаружение и реагирование на поступление в информационную систему незапрашиваемых электронных сообщений (писем, документов) и иной информации, не относящихся к функционированию информационной системы (защита от спама)",
        marks: FROM_2,
    },
    MeasureRow {
        code: "ОЦЛ.6",
        section: SECTION_OCL,
        description: "Обеспечение отказоустойчивости технических средств",
        marks: ONLY_1,
    },
    MeasureRow {
        code: "ЗСВ.1",
        section: SECTION_ZSV,
        description: "Идентификация и аутентификация субъектов доступа и объектов доступа в виртуальной инфраструктуре, в том числе администраторов управления средствами виртуализации",
        marks: ALL,
    },
    MeasureRow {
        code: "ЗСВ.2",
        section: SECTION_ZSV,
        description: "Управление доступом субъектов доступа к объектам доступа в виртуальной инфраструктуре, в том числе внутри виртуальных машин",
        marks: ALL,
    },
    MeasureRow {
        code: "ЗСВ.3",
        section: SECTION_ZSV,
        description: "Регистрация событий безопасности в виртуальной инфраструктуре",
        marks: FROM_3,
    },
    MeasureRow {
        code: "ЗТС.3",
        section: SECTION_ZTS,
        description: "Контроль и управление физическим доступом к техническим средствам, средствам защиты информации, средствам обеспечения функционирования, а также в помещения и сооружения, в которых они установлены",
        marks: ALL,
    },
    MeasureRow {
        code: "ЗТС.4",
        section: SECTION_ZTS,
        description: "Размещение устройств вывода (отображения) информации, исключающее ее несанкционированный просмотр",
        marks: ALL,
    },
    MeasureRow {
        code: "ЗИС.1",
        section: SECTION_ZIS,
        description: "Разделение в информационной системе функций по управлению (администрированию) информационной системой, управлению системой защиты персональных данных и функций по обработке персональных данных",
        marks: ONLY_1,
    },
    MeasureRow {
        code: "ЗИС.3",
        section: SECTION_ZIS,
        description: "Обеспечение защиты персональных данных от раскрытия, модификации и навязывания (ввода ложной информации) при ее передаче (подготовке к передаче) по каналам связи, имеющим выход за пределы контролируемой зоны",
        marks: ALL,
    },
    MeasureRow {
        code: "ЗИС.17",
        section: SECTION_ZIS,
        description: "Разбиение информационной системы на сегменты (сегментирование информационной системы) и обеспечение защиты периметров сегментов информационной системы",
        marks: FROM_2,
    },
    MeasureRow {
        code: "ЗИС.20",
        section: SECTION_ZIS,
        description: "Защита беспроводных соединений, применяемых в информационной системе",
        marks: FROM_3,
    },
    MeasureRow {
        code: "ИНЦ.1",
        section: SECTION_INC,
        description: "Определение лиц, ответственных за выявление инцидентов и реагирование на них",
        marks: FROM_2,
    },
    MeasureRow {
        code: "ИНЦ.2",
        section: SECTION_INC,
        description: "Обнаружение, идентификация и регистрация инцидентов",
        marks: FROM_2,
    },
    MeasureRow {
        code: "ИНЦ.4",
        section: SECTION_INC,
        description: "Анализ инцидентов, в том числе определение источников и причин возникновения инцидентов, а также оценка их последствий",
        marks: FROM_2,
    },
    MeasureRow {
        code: "УКФ.1",
        section: SECTION_UKF,
        description: "Определение лиц, которым разрешены действия по внесению изменений в конфигурацию информационной системы и системы защиты персональных данных",
        marks: FROM_2,
    },
    MeasureRow {
        code: "УКФ.2",
        section: SECTION_UKF,
        description: "Управление изменениями конфигурации информационной системы и системы защиты персональных данных",
        marks: FROM_2,
    },
];

/// Organizational requirements that apply to `level`, in regulatory order.
pub fn base_requirements(level: Level) -> &'static [&'static str] {
    match level {
        Level::L1 => LEVEL_1_REQUIREMENTS,
        Level::L2 => LEVEL_2_REQUIREMENTS,
        Level::L3 => LEVEL_3_REQUIREMENTS,
        Level::L4 => LEVEL_4_REQUIREMENTS,
    }
}

/// Base set of technical measures for `level`, in canonical table order.
pub fn measures_for_level(level: Level) -> Vec<Measure> {
    MEASURE_TABLE
        .iter()
        .filter(|row| row.required_at(level))
        .map(MeasureRow::to_measure)
        .collect()
}

/// Catalog lookup for a raw level number, e.g. from the command line.
pub fn measures_for_number(level: u8) -> Result<Vec<Measure>, CatalogError> {
    Level::try_from(level).map(measures_for_level)
}
