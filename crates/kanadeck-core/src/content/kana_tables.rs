//! Letter tables with mnemonic hints for Korean-speaking learners.

use super::kana::{Kana, KANA_COUNT};

const fn kana(
    glyph: char,
    romaji: &'static str,
    hangul: &'static str,
    keyword: &'static str,
    explanation: &'static str,
) -> Kana {
    Kana {
        glyph,
        romaji,
        hangul,
        keyword,
        explanation,
    }
}

pub(super) static HIRAGANA: [Kana; KANA_COUNT] = [
    kana(
        'あ',
        "a",
        "아",
        "아기",
        "둥근 고리 부분과 위에 얹힌 획이 아기가 웅크린 채 머리를 숙인 모습을 닮았습니다.",
    ),
    kana(
        'い',
        "i",
        "이",
        "이빨",
        "곧게 위로 뻗은 두 개의 획이 두 개의 이빨 모양처럼 보입니다.",
    ),
    kana(
        'う',
        "u",
        "우",
        "우산",
        "글자의 마지막 휜 곡선이 우산 손잡이 모양과 비슷합니다.",
    ),
    kana(
        'え',
        "e",
        "에",
        "엘리펀트(elephant)",
        "글자의 곡선 부분이 코끼리의 코처럼 길게 휘어져 내려오는 것을 연상해 보세요.",
    ),
    kana(
        'お',
        "o",
        "오",
        "오리",
        "오리의 둥근 몸통 위에 짧은 획이 부리처럼 살짝 얹혀있는 모습입니다.",
    ),
    kana(
        'か',
        "ka",
        "카",
        "카드 1",
        "글자의 각진 형태가 카드 모서리를 닮았고, 오른쪽 위 작은 점은 카드에 표기된 숫자 1처럼 보입니다.",
    ),
    kana(
        'き',
        "ki",
        "키",
        "키(key)",
        "세 개의 획과 마지막 곡선이 열쇠 머리와 톱니 모양을 연상시킵니다.",
    ),
    kana(
        'く',
        "ku",
        "쿠",
        "쿠션",
        "옆으로 뉘어진 삼각 쿠션 모양을 닮았습니다.",
    ),
    kana(
        'け',
        "ke",
        "케",
        "케이블",
        "왼쪽의 긴 세로 획은 케이블이고, 오른쪽 획은 케이블을 걸어 둔 고리 모양처럼 보입니다.",
    ),
    kana(
        'こ',
        "ko",
        "코",
        "코끼리",
        "나란한 두 개의 선이 튼튼한 코끼리 다리 두 개를 연상시킵니다.",
    ),
    kana(
        'さ',
        "sa",
        "사",
        "선비 사",
        "위쪽 획이 갓을 쓴 모양이고 아래가 선비의 얼굴 모양처럼 보입니다.",
    ),
    kana(
        'し',
        "shi",
        "시",
        "시작선",
        "웅크린 자세로 달리기 시작선에 준비하고 있는 주자의 옆모습을 닮았습니다.",
    ),
    kana(
        'す',
        "su",
        "스",
        "스트로우(straw)",
        "둥글게 말린 빨대(스트로우) 모양과 아래로 내려온 획을 연결해 보세요.",
    ),
    kana(
        'せ',
        "se",
        "세",
        "세상 세",
        "한자 '世(세상 세)'의 형태와 매우 유사하다는 점을 활용해 기억하세요.",
    ),
    kana(
        'そ',
        "so",
        "소",
        "소용돌이",
        "글자의 끝 부분이 힘차게 안쪽으로 말리는 모양이 소용돌이를 연상시킵니다.",
    ),
    kana(
        'た',
        "ta",
        "타",
        "타이어",
        "위쪽은 오토바이의 몸체, 아래 곡선은 두 개의 타이어를 옆에서 본 모습처럼 보입니다.",
    ),
    kana(
        'ち',
        "chi",
        "치",
        "치타",
        "오른쪽으로 솟아오른 곡선이 달리는 치타의 엉덩이와 꼬리를 연상시킵니다.",
    ),
    kana(
        'つ',
        "tsu",
        "츠/쯔(가까운 소리)",
        "추(무게추)",
        "위에서 끈에 매달려 아래로 쏠린 금속 추(무게추)의 단면처럼 보입니다.",
    ),
    kana(
        'て',
        "te",
        "테",
        "테이블",
        "옆으로 길게 뻗은 수평선이 테이블 상판을 옆에서 본 모습처럼 보입니다.",
    ),
    kana(
        'と',
        "to",
        "토",
        "토끼",
        "상단의 짧은 두 획이 토끼의 쫑긋한 두 귀처럼 보입니다.",
    ),
    kana(
        'な',
        "na",
        "나",
        "나무",
        "나무의 줄기와 복잡하게 엉킨 잎이나 가지의 모습을 연상시킵니다.",
    ),
    kana(
        'に',
        "ni",
        "니",
        "니은(ㄴ)",
        "두 개의 획이 마치 한국어 자음 'ㄴ(니은)'의 변형된 모양처럼 보입니다.",
    ),
    kana(
        'ぬ',
        "nu",
        "누",
        "누들(noodle)",
        "젓가락으로 구불거리는 면발(누들)을 잡고 들어 올린 모양을 연상시킵니다.",
    ),
    kana(
        'ね',
        "ne",
        "네",
        "네코(neko)",
        "아래로 둥글게 감아 올린 마지막 획이 네코(고양이)의 꼬리 모양을 연상시킵니다.",
    ),
    kana(
        'の',
        "no",
        "노",
        "노(no) 표지판",
        "둥글게 말린 형태가 마치 'No(금지)' 표지판의 원형을 연상시킵니다.",
    ),
    kana(
        'は',
        "ha",
        "하",
        "하마",
        "중앙의 긴 수직 획과 좌우의 획이 하마의 크고 두꺼운 실루엣을 나타냅니다.",
    ),
    kana(
        'ひ',
        "hi",
        "히",
        "히히",
        "글자 모양이 히히 하고 옆으로 길게 웃는 입 모양을 닮았습니다.",
    ),
    kana(
        'ふ',
        "fu",
        "후",
        "후드티",
        "좌우의 짧은 획은 주머니에 넣은 손, 중앙의 큰 획은 후드티를 입은 사람의 형태를 연상시킵니다.",
    ),
    kana(
        'へ',
        "he",
        "헤",
        "헤드폰",
        "좌우로 대칭되는 모양이 머리 위에 쓴 헤드폰 밴드를 닮았습니다.",
    ),
    kana(
        'ほ',
        "ho",
        "호",
        "호스",
        "위쪽의 두 획은 수도꼭지, 아래로 이어진 획은 호스를 연상시킵니다.",
    ),
    kana(
        'ま',
        "ma",
        "마",
        "마라톤",
        "아래쪽 곡선이 마라톤 선수가 달릴 때 앞으로 뻗은 다리를 연상시킵니다.",
    ),
    kana(
        'み',
        "mi",
        "미",
        "미역",
        "세 개의 획이 미역 줄기가 물속에서 흔들리는 모양처럼 보입니다.",
    ),
    kana(
        'む',
        "mu",
        "무",
        "무(채소)",
        "둥근 머리 부분과 아래쪽으로 꼬인 획이 무의 형태를 닮았습니다.",
    ),
    kana(
        'め',
        "me",
        "메",
        "메달",
        "글자의 모양이 갈고리에 리본이 달린 메달을 걸어 놓은 것처럼 보입니다.",
    ),
    kana(
        'も',
        "mo",
        "모",
        "모자",
        "위쪽 획은 모자의 정수리 버튼이나 장식, 아래 획은 모자의 챙을 연상시킵니다.",
    ),
    kana(
        'や',
        "ya",
        "야",
        "야자수",
        "세로 기둥과 위쪽의 갈라진 획이 야자수 나무와 잎 실루엣을 연상시킵니다.",
    ),
    kana(
        'ゆ',
        "yu",
        "유",
        "유모차",
        "둥근 틀과 손잡이가 바퀴 달린 유모차의 구조를 닮았습니다.",
    ),
    kana(
        'よ',
        "yo",
        "요",
        "요요",
        "두 개의 동그란 획이 요요처럼 위아래로 나란히 있는 모양을 연상시킵니다.",
    ),
    kana(
        'ら',
        "ra",
        "라",
        "라이터",
        "위쪽의 작은 획은 라이터 불꽃, 아래의 둥근 부분은 라이터 몸통을 연상시킵니다.",
    ),
    kana(
        'り',
        "ri",
        "리",
        "리본",
        "두 개의 획이 나란히 늘어진 리본 끈처럼 보입니다.",
    ),
    kana(
        'る',
        "ru",
        "루",
        "캥거루",
        "둥글게 말린 아래쪽이 캥거루의 주머니와 다리를 연상시킵니다.",
    ),
    kana(
        'れ',
        "re",
        "레",
        "레일",
        "중간은 길게 뻗어있고, 아래쪽 곡선이 여러 갈래로 나뉜 철도 레일처럼 보입니다.",
    ),
    kana(
        'ろ',
        "ro",
        "로",
        "로프",
        "둥글게 말린 형태가 밧줄(로프)이 꼬여 있는 모양과 비슷합니다.",
    ),
    kana(
        'わ',
        "wa",
        "와",
        "와(감탄사)",
        "글자의 형태가 놀라거나 감탄하며 입을 크게 벌린 모양을 형상화합니다.",
    ),
    kana(
        'を',
        "wo",
        "오/워",
        "오리발",
        "퍼진 형태가 물갈퀴 달린 오리발 모양을 연상시킵니다.",
    ),
    kana(
        'ん',
        "n",
        "응/ㄴ",
        "응~",
        "글자의 곡선이 '응~' 하고 대답할 때의 물결치는 듯한 느낌을 표현합니다.",
    ),
];

pub(super) static KATAKANA: [Kana; KANA_COUNT] = [
    kana(
        'ア',
        "a",
        "아",
        "아이스크림",
        "수직선 위에 짧은 획들이 얹힌 모양이 아이스크림 막대 위에 크림이 솟아오른 것을 연상시킵니다.",
    ),
    kana(
        'イ',
        "i",
        "이",
        "이쑤시개",
        "두 개의 획이 이쑤시개와 비스듬한 치아를 연상시키는 모습입니다.",
    ),
    kana(
        'ウ',
        "u",
        "우",
        "우산",
        "윗부분이 뾰족하고 아래로 내려오는 모양이 우산 손잡이처럼 휘어져 있습니다.",
    ),
    kana(
        'エ',
        "e",
        "에",
        "엘리베이터",
        "수직선과 두 개의 꺾인 획이 닫힌 엘리베이터 문의 각진 형태처럼 보입니다.",
    ),
    kana(
        'オ',
        "o",
        "오",
        "오리배",
        "넓고 각진 아래 구조가 물 위에 둥둥 떠 있는 오리배의 실루엣을 닮았습니다.",
    ),
    kana(
        'カ',
        "ka",
        "카",
        "카메라",
        "각진 외형과 작은 획이 카메라 본체를 단순화한 것처럼 보입니다.",
    ),
    kana(
        'キ',
        "ki",
        "키",
        "키(key)",
        "세 개의 평행선과 이를 가로지르는 획이 열쇠(key) 모양을 연상시킵니다.",
    ),
    kana(
        'ク',
        "ku",
        "쿠",
        "쿠션",
        "꺾여 있는 하나의 획이 눌린 사각 쿠션의 모서리처럼 보입니다.",
    ),
    kana(
        'ケ',
        "ke",
        "케",
        "케이크",
        "케이크 상단 단면 아래로 생크림이 길게 흘러내리는 듯한 모양을 연상하게 합니다.",
    ),
    kana(
        'コ',
        "ko",
        "코",
        "코너(corner)",
        "오른쪽이 막힌 'ㄷ'자 형태로, 방의 코너나 상자의 윗부분처럼 보입니다.",
    ),
    kana(
        'サ',
        "sa",
        "사",
        "사다리",
        "세 줄의 획이 사다리의 발판(단)과 이를 지지하는 기둥을 연상시킵니다.",
    ),
    kana(
        'シ',
        "shi",
        "시",
        "시계바늘",
        "세 개의 짧은 획이 시계바늘처럼 아래에서 위로 방사형으로 뻗어 올라가는 모양입니다.",
    ),
    kana(
        'ス',
        "su",
        "스",
        "스탠드",
        "수직 기둥과 이를 가로지르는 획이 세워놓은 스탠드 조명 기둥과 받침 구조를 연상시킵니다.",
    ),
    kana(
        'セ',
        "se",
        "세",
        "가늘 세",
        "세 개의 수평선과 수직선이 한글 자음 'ㄱ'과 'ㄴ'이 합쳐진 듯한 형태를 가집니다.",
    ),
    kana(
        'ソ',
        "so",
        "소",
        "소나기",
        "두 개의 대각선 획이 비가 사선으로 쏟아지는 소나기의 모습을 연상하게 합니다.",
    ),
    kana(
        'タ',
        "ta",
        "타",
        "타워",
        "윗부분의 획과 아래의 수직선이 단순한 타워 건물의 구조를 닮았습니다.",
    ),
    kana(
        'チ',
        "chi",
        "치",
        "치즈",
        "각진 모양이 모서리가 잘린 치즈 조각의 단면을 연상시킵니다.",
    ),
    kana(
        'ツ',
        "tsu",
        "츠/쯔",
        "츠나미(쓰나미)",
        "세 개의 짧은 획이 물결이 튀는 듯한 방향성을 나타내며 쓰나미를 연상시킵니다.",
    ),
    kana(
        'テ',
        "te",
        "테",
        "테이블",
        "수평선과 수직선이 테이블의 상판과 다리를 닮았습니다.",
    ),
    kana(
        'ト',
        "to",
        "토",
        "토치(torch)",
        "길쭉한 수직 본체와 오른쪽의 짧은 획이 토치(torch)의 점화 버튼처럼 보입니다.",
    ),
    kana(
        'ナ',
        "na",
        "나",
        "나무",
        "세로줄과 가로줄이 나무 가지가 갈라지는 모습과 비슷합니다.",
    ),
    kana(
        'ニ',
        "ni",
        "니",
        "니트",
        "두 개의 평행한 수평선이 니트 짜임의 줄무늬를 떠올리게 합니다. 한자 '이(二)'와 같습니다.",
    ),
    kana(
        'ヌ',
        "nu",
        "누",
        "누텔라 뚜껑",
        "꺾이는 획이 누텔라 뚜껑 모양에 초콜릿 소스가 묻어 흘러내리는 모습을 연상하게 합니다.",
    ),
    kana(
        'ネ',
        "ne",
        "네",
        "네잎클로버",
        "곡선과 짧은 점들이 네잎클로버의 잎맥이나 복잡한 줄기처럼 연결된 모습을 연상시킵니다.",
    ),
    kana(
        'ノ',
        "no",
        "노",
        "노즈(nose)",
        "대각선 하나의 획이 사람의 코(nose) 옆모습처럼 길게 뻗어 있습니다.",
    ),
    kana(
        'ハ',
        "ha",
        "하",
        "하프",
        "두 개의 사선이 현악기 하프의 옆모습처럼 대칭되는 모양입니다.",
    ),
    kana(
        'ヒ',
        "hi",
        "히",
        "히터",
        "세로로 꺾인 두 개의 획이 히터 기둥이나 발열체의 모양과 가깝습니다.",
    ),
    kana(
        'フ',
        "fu",
        "후",
        "후드티 주머니",
        "아래가 넓게 벌어진 모양이 후드티의 아래자락이나 주머니 입구를 닮았습니다.",
    ),
    kana(
        'ヘ',
        "he",
        "헤",
        "헤드셋",
        "약간 올라간 하나의 획이 머리 위에 쓴 헤드셋 밴드를 단순화한 모습입니다.",
    ),
    kana(
        'ホ',
        "ho",
        "호",
        "호수",
        "세로선과 점 두 개가 호수 위에 떠 있는 물방울이나 작은 섬처럼 보입니다.",
    ),
    kana(
        'マ',
        "ma",
        "마",
        "마술봉",
        "두 개의 꺾인 획이 마술봉의 머리 부분을 닮은 마름모꼴을 연상시킵니다.",
    ),
    kana(
        'ミ',
        "mi",
        "미",
        "미로",
        "세 개의 짧은 선이 복잡한 미로의 길처럼 나란히 이어져 있습니다.",
    ),
    kana(
        'ム',
        "mu",
        "무",
        "무등산",
        "오른쪽으로 꺾이는 획이 산의 봉우리를 연상하게 합니다.",
    ),
    kana(
        'メ',
        "me",
        "메",
        "메모",
        "두 개의 사선이 교차하는 'X' 모양이 중요 표시나 메모의 구석을 연상시킵니다.",
    ),
    kana(
        'モ',
        "mo",
        "모",
        "모자",
        "세 개의 획이 모자의 챙, 몸체, 윗부분 단면을 연상시키는 구조입니다.",
    ),
    kana(
        'ヤ',
        "ya",
        "야",
        "야자나무",
        "사선들이 갈라져 올라가는 모습이 야자나무의 잎과 줄기를 닮았습니다.",
    ),
    kana(
        'ユ',
        "yu",
        "유",
        "깨진 유리컵",
        "사각 형태에서 한 획이 비어있어 모서리가 깨진 유리컵의 실루엣처럼 보입니다.",
    ),
    kana(
        'ヨ',
        "yo",
        "요",
        "요트",
        "세 개의 평행한 수평선이 요트 갑판의 층 구조를 닮았습니다.",
    ),
    kana(
        'ラ',
        "ra",
        "라",
        "라디오",
        "두 획이 고전 라디오의 안테나와 몸통을 연상시키는 단순한 모양입니다.",
    ),
    kana(
        'リ',
        "ri",
        "리",
        "리본",
        "두 개의 짧은 수직선이 리본의 끝 부분이 나란히 늘어진 것처럼 보입니다.",
    ),
    kana(
        'ル',
        "ru",
        "루",
        "루돌프",
        "아래로 길게 꺾이는 획이 열심히 달리는 루돌프 사슴의 두 다리를 연상시킵니다.",
    ),
    kana(
        'レ',
        "re",
        "레",
        "레몬",
        "오른쪽 아래로 꺾이는 하나의 획이 레몬을 자른 단면처럼 보입니다.",
    ),
    kana(
        'ロ',
        "ro",
        "로",
        "로고",
        "네모난 형태가 단순한 로고 프레임이나 상자를 연상시킵니다.",
    ),
    kana(
        'ワ',
        "wa",
        "와",
        "와인잔",
        "윗부분과 아래로 꺾이는 획이 와인잔의 컵 부분을 연상시키는 모양입니다.",
    ),
    kana(
        'ヲ',
        "wo",
        "오/워",
        "오뚜기 또는 오키",
        "위는 넓고 아래는 좁은 구조와 가운데 교차하는 획이 오뚜기 인형 실루엣과 닮았습니다. 오(wo) 모양은 자음 ㅋ을 닯았다는 의미에서 오키로 외울 수 있습니다.",
    ),
    kana(
        'ン',
        "n",
        "응/ㄴ",
        "응원",
        "오른쪽 아래로 길게 뻗는 한 획이 응원할 때 사용하는 효과나 방향성을 나타내는 듯합니다.",
    ),
];
