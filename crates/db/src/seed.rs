//! Sample catalog used to populate an empty database for demos.

use showcase_core::scenario::CreateScenario;
use sqlx::PgPool;

use crate::repositories::ScenarioRepo;

struct Sample {
    title: &'static str,
    description: &'static str,
    business_problem: &'static str,
    solution: &'static str,
    technical_details: &'static str,
    impact: &'static str,
    category: &'static str,
    image_url: &'static str,
    team: &'static str,
    timeline: &'static str,
    metrics: &'static [&'static str],
    owner_name: &'static str,
}

const SAMPLES: &[Sample] = &[
    Sample {
        title: "智能数据清洗系统",
        description: "基于AI的数据质量检测与自动修复工具，大幅提升数据准确性",
        business_problem: "业务部门每月需要花费大量人工时间清洗Excel数据，错误率高且效率低下。",
        solution: "基于机器学习自动识别缺失值、异常值、重复记录，并给出修复建议，支持自定义规则。",
        technical_details: "Python + Pandas + Scikit-learn；Isolation Forest 异常检测，KNN 缺失值插补。",
        impact: "数据清洗从每月40小时降至8小时，准确率从85%提升至98%。",
        category: "数据处理",
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=450&fit=crop",
        team: "数据智能团队",
        timeline: "3周",
        metrics: &["效率提升80%", "准确率98%", "覆盖3部门"],
        owner_name: "陈立",
    },
    Sample {
        title: "合同审批自动化流程",
        description: "AI驱动的合同智能审核与风险预警系统，加速审批流程",
        business_problem: "法务部门人工审阅销售合同，审批周期长达5-7天，容易遗漏风险点。",
        solution: "利用NLP自动提取关键条款，对比标准模板并标记风险点，集成审批工作流自动路由。",
        technical_details: "Python + SpaCy + FastAPI + PostgreSQL；NER 提取合同要素，规则引擎评估风险。",
        impact: "审批周期从7天缩短至2天，法务工作量减少60%，高风险条款识别率95%。",
        category: "自动化",
        image_url: "https://images.unsplash.com/photo-1450101499163-c8848c66ca85?w=800&h=450&fit=crop",
        team: "企业效率团队",
        timeline: "4周",
        metrics: &["审批提速71%", "工作量减少60%", "识别率95%"],
        owner_name: "赵晴",
    },
    Sample {
        title: "销售预测分析平台",
        description: "机器学习驱动的销售趋势预测与智能决策支持系统",
        business_problem: "销售团队依赖经验判断趋势，库存积压与缺货频发，预测准确性不足50%。",
        solution: "整合历史销售、市场趋势与季节性因素，使用时间序列与梯度提升模型预测，并提供多场景模拟。",
        technical_details: "Python + Prophet + XGBoost + Plotly；Airflow 调度数据管道，MLflow 管理模型。",
        impact: "预测准确率从48%提升至82%，库存周转率提高35%，缺货率降低70%。",
        category: "分析预测",
        image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=450&fit=crop",
        team: "商业智能团队",
        timeline: "6周",
        metrics: &["准确率82%", "周转率+35%", "节省500万"],
        owner_name: "孙浩",
    },
    Sample {
        title: "会议纪要智能生成",
        description: "语音转文字+AI摘要的会议记录自动化工具",
        business_problem: "手动整理会议纪要耗时且容易遗漏关键信息，记录质量参差不齐。",
        solution: "实时语音转写，自动提取关键决策、待办事项和行动计划，生成结构化会议报告。",
        technical_details: "Azure Speech Service + GPT-4 + Node.js；说话人分离，推送至企业IM。",
        impact: "每场会议节省15-20分钟，纪要完整度95%，使用率90%。",
        category: "文档生成",
        image_url: "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=800&h=450&fit=crop",
        team: "协作效率团队",
        timeline: "3周",
        metrics: &["节省20分钟", "完整度95%", "使用率90%"],
        owner_name: "周雯",
    },
];

impl Sample {
    fn to_input(&self) -> CreateScenario {
        CreateScenario {
            title: self.title.into(),
            description: self.description.into(),
            business_problem: self.business_problem.into(),
            solution: self.solution.into(),
            technical_details: self.technical_details.into(),
            impact: self.impact.into(),
            category: self.category.into(),
            image_url: self.image_url.into(),
            team: self.team.into(),
            timeline: self.timeline.into(),
            metrics: self.metrics.iter().map(|m| m.to_string()).collect(),
            owner_name: self.owner_name.into(),
            ..CreateScenario::default()
        }
    }
}

/// The bundled sample scenarios as create DTOs.
pub fn sample_scenarios() -> Vec<CreateScenario> {
    SAMPLES.iter().map(Sample::to_input).collect()
}

/// Insert the sample catalog when the `scenarios` table is empty.
///
/// Returns the number of rows inserted (zero when data already exists).
pub async fn seed_sample_scenarios(pool: &PgPool) -> Result<usize, sqlx::Error> {
    if ScenarioRepo::count(pool).await? > 0 {
        tracing::debug!("Scenarios already present, skipping sample seed");
        return Ok(0);
    }

    let samples = sample_scenarios();
    for input in &samples {
        ScenarioRepo::create(pool, input).await?;
    }
    tracing::info!(count = samples.len(), "Seeded sample scenarios");
    Ok(samples.len())
}
